// 该文件是 Shanan （山南西风） 项目的一部分。
// src/detection.rs - 检测结果定义
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

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::label::WithLabel;

/// 像素坐标下的检测框，(x, y) 为左上角
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox<T = i32> {
  pub x: T,
  pub y: T,
  pub width: T,
  pub height: T,
}

impl<T> BBox<T> {
  pub fn new(x: T, y: T, width: T, height: T) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }
}

impl<T: Copy + Sub<Output = T>> BBox<T> {
  /// 由左上、右下角点构造
  pub fn ltrb(x_min: T, y_min: T, x_max: T, y_max: T) -> Self {
    Self::new(x_min, y_min, x_max - x_min, y_max - y_min)
  }
}

impl<T: Copy + Into<f64>> BBox<T> {
  /// 中心点，先提升到 f64 再做除法
  pub fn center(&self) -> (f64, f64) {
    (
      self.x.into() + self.width.into() / 2.0,
      self.y.into() + self.height.into() / 2.0,
    )
  }

  pub fn size(&self) -> (f64, f64) {
    (self.width.into(), self.height.into())
  }
}

/// 单个检测结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult<T = i32> {
  pub bbox: BBox<T>,
  pub confidence: f32,
  pub class_id: i32,
  #[serde(default)]
  pub class_name: String,
}

impl<T> DetectionResult<T> {
  pub fn new(bbox: BBox<T>, confidence: f32, class_id: i32, class_name: impl Into<String>) -> Self {
    Self {
      bbox,
      confidence,
      class_id,
      class_name: class_name.into(),
    }
  }
}

impl DetectionResult<f32> {
  /// 由模型输出的归一化角点框换算到像素坐标
  pub fn from_normalized<L: WithLabel>(
    item: &DetectItem<L>,
    image_width: u32,
    image_height: u32,
  ) -> Self {
    let (w, h) = (image_width as f32, image_height as f32);
    let [x_min, y_min, x_max, y_max] = item.bbox;

    Self {
      bbox: BBox::ltrb(x_min * w, y_min * h, x_max * w, y_max * h),
      confidence: item.score,
      class_id: i32::try_from(item.kind.to_label_id()).unwrap_or(i32::MAX),
      class_name: item.kind.to_label_str(),
    }
  }
}

/// 模型后处理输出的检测项
#[derive(Debug, Clone)]
pub struct DetectItem<L> {
  pub kind: L,
  pub score: f32,
  pub bbox: [f32; 4], // [x_min, y_min, x_max, y_max]，归一化坐标
}

#[derive(Debug, Clone)]
pub struct DetectResult<L> {
  pub items: Box<[DetectItem<L>]>,
}

impl<L> DetectResult<L> {
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<L: WithLabel> DetectResult<L> {
  pub fn to_detection_results(&self, image_width: u32, image_height: u32) -> Vec<DetectionResult<f32>> {
    self
      .items
      .iter()
      .map(|item| DetectionResult::from_normalized(item, image_width, image_height))
      .collect()
  }
}
