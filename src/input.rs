// 该文件是 Shanan （山南西风） 项目的一部分。
// src/input.rs - 检测记录输入
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

use serde::{Deserialize, Serialize};

use crate::{
  detection::DetectionResult,
  msg::{Header, Time},
};

mod jsonl_input;
pub use self::jsonl_input::{JsonLinesInput, JsonLinesInputError};

/// 一帧图像的检测记录
///
/// 置信度与检测器输出一致按 f32 保存，转换为消息时再扩展为 f64，
/// 因此 JSON 中的 `0.85` 发布后为 `0.8500000238418579`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
  #[serde(default)]
  pub stamp: Option<Time>,
  #[serde(default)]
  pub frame_id: Option<String>,
  pub image_width: u32,
  pub image_height: u32,
  #[serde(default)]
  pub detections: Vec<DetectionResult<f64>>,
}

impl FrameRecord {
  /// 缺少时间戳时取当前时间，缺少坐标系时使用 `default_frame_id`
  pub fn header(&self, default_frame_id: &str) -> Header {
    Header::new(
      self.stamp.unwrap_or_else(Time::now),
      self
        .frame_id
        .clone()
        .unwrap_or_else(|| default_frame_id.to_string()),
    )
  }
}
