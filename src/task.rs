// 该文件是 Shanan （山南西风） 项目的一部分。
// src/task.rs - 转换任务
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

use tracing::{info, warn};

use crate::{
  convert::to_detection_2d_array, input::FrameRecord, msg::Detection2DArray, output::Publish,
};

pub const DEFAULT_FRAME_ID: &str = "camera_link";

pub trait Task<I, O>: Sized {
  type Error;
  fn run_task(self, input: I, output: O) -> Result<(), Self::Error>;
}

/// 逐帧读取检测记录，转换为 `Detection2DArray` 后发布
#[derive(Debug)]
pub struct ConvertTask {
  frame_number: Option<usize>,
  frame_id: String,
}

impl Default for ConvertTask {
  fn default() -> Self {
    Self {
      frame_number: None,
      frame_id: DEFAULT_FRAME_ID.to_string(),
    }
  }
}

impl ConvertTask {
  pub fn with_frame_number(mut self, frame_number: Option<usize>) -> Self {
    self.frame_number = frame_number;
    self
  }

  /// 记录中没有 `frame_id` 时使用的坐标系
  pub fn with_frame_id(mut self, frame_id: impl Into<String>) -> Self {
    self.frame_id = frame_id.into();
    self
  }
}

impl<
  IE: std::error::Error + Sync + Send + 'static,
  OE: std::error::Error + Sync + Send + 'static,
  I: Iterator<Item = Result<FrameRecord, IE>>,
  O: Publish<Detection2DArray, Error = OE>,
> Task<I, O> for ConvertTask
{
  type Error = anyhow::Error;

  fn run_task(self, input: I, output: O) -> Result<(), Self::Error> {
    info!("开始任务...");
    let mut frame_index = 0usize;
    let mut total_detections = 0usize;

    // take 保证达到帧数后不再向输入多取一条记录
    let limit = self.frame_number.unwrap_or(usize::MAX);
    for record in input.take(limit) {
      let record = record?;
      frame_index += 1;

      let header = record.header(&self.frame_id);
      let message = to_detection_2d_array(
        &record.detections,
        &header,
        record.image_width,
        record.image_height,
      );
      total_detections += message.len();

      if message.is_empty() {
        info!("第 {} 帧没有检测结果", frame_index);
      } else {
        info!("第 {} 帧检测到 {} 个对象", frame_index, message.len());
      }
      output.publish(&message)?;
    }

    if self.frame_number.is_some_and(|n| frame_index >= n) {
      info!("达到指定帧数 {}, 退出任务循环", frame_index);
    }
    if frame_index == 0 {
      warn!("没有读取到任何检测记录");
    }
    info!(
      "任务完成，共 {} 帧, {} 个检测",
      frame_index, total_detections
    );
    Ok(())
  }
}
