// 该文件是 Shanan （山南西风） 项目的一部分。
// src/convert.rs - 检测结果到 Detection2D 消息的转换
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use tracing::{debug, trace};

use crate::{
  detection::DetectionResult,
  msg::{
    BoundingBox2D, Detection2D, Detection2DArray, Header, ObjectHypothesis,
    ObjectHypothesisWithPose, Point2D, Pose2D,
  },
};

/// 将单个检测结果转换为 `Detection2D`。
///
/// 左上角加宽高的一半得到中心点，尺寸原样保留。假设的 `class_id` 取类别名称，
/// 分数直接复制置信度，不做截断。图像尺寸目前不参与计算。
pub fn to_detection_2d<T: Copy + Into<f64>>(
  det: &DetectionResult<T>,
  header: &Header,
  image_width: u32,
  image_height: u32,
) -> Detection2D {
  let (center_x, center_y) = det.bbox.center();
  let (size_x, size_y) = det.bbox.size();

  trace!(
    "检测框 {} ({:.3}): 中心 ({}, {}), 尺寸 {}x{}, 图像 {}x{}",
    det.class_name, det.confidence, center_x, center_y, size_x, size_y, image_width, image_height
  );

  Detection2D {
    header: header.clone(),
    results: vec![ObjectHypothesisWithPose {
      hypothesis: ObjectHypothesis {
        class_id: det.class_name.clone(),
        score: f64::from(det.confidence),
      },
      ..Default::default()
    }],
    bbox: BoundingBox2D {
      center: Pose2D {
        position: Point2D {
          x: center_x,
          y: center_y,
        },
        theta: 0.0,
      },
      size_x,
      size_y,
    },
    id: String::new(),
  }
}

/// 按输入顺序逐个转换，空输入得到空数组
pub fn to_detection_2d_array<T: Copy + Into<f64>>(
  detections: &[DetectionResult<T>],
  header: &Header,
  image_width: u32,
  image_height: u32,
) -> Detection2DArray {
  debug!(
    "转换 {} 个检测结果, 坐标系: {}",
    detections.len(),
    header.frame_id
  );

  Detection2DArray {
    header: header.clone(),
    detections: detections
      .iter()
      .map(|det| to_detection_2d(det, header, image_width, image_height))
      .collect(),
  }
}
