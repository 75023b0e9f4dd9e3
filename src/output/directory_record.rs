// 该文件是 Shanan （山南西风） 项目的一部分。
// src/output/directory_record.rs - 目录记录输出
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

use std::{path::PathBuf, sync::Mutex};

use chrono::{Datelike, Utc};
use thiserror::Error;
use tracing::debug;

use crate::{FromUrl, FromUrlWithScheme, msg::Detection2DArray, output::Publish};

#[derive(Error, Debug)]
pub enum DirectoryRecordOutputError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("序列化错误: {0}")]
  SerializeError(#[from] serde_json::Error),
  #[error("计数器锁已失效")]
  LockPoisoned,
}

/// 按日期分目录保存每帧消息，文件名为 `时-分-秒-计数.json`
pub struct DirectoryRecordOutput {
  directory: PathBuf,
  frame_counter: Mutex<u16>,
  always: bool,
}

impl FromUrlWithScheme for DirectoryRecordOutput {
  const SCHEME: &'static str = "folder";
}

impl FromUrl for DirectoryRecordOutput {
  type Error = DirectoryRecordOutputError;

  fn from_url(uri: &url::Url) -> Result<Self, Self::Error> {
    if uri.scheme() != Self::SCHEME {
      return Err(DirectoryRecordOutputError::SchemeMismatch);
    }

    let always = uri.query_pairs().any(|(k, _)| k == "always");

    Ok(DirectoryRecordOutput {
      directory: PathBuf::from(uri.path()),
      frame_counter: Mutex::new(0),
      always,
    })
  }
}

impl DirectoryRecordOutput {
  fn frame_id(&self) -> Result<u16, DirectoryRecordOutputError> {
    let mut counter = self
      .frame_counter
      .lock()
      .map_err(|_| DirectoryRecordOutputError::LockPoisoned)?;
    *counter = counter.wrapping_add(1);
    Ok(*counter)
  }

  fn frame_path(&self) -> Result<PathBuf, DirectoryRecordOutputError> {
    let now = Utc::now();
    let directory = self
      .directory
      .join(now.year().to_string())
      .join(format!("{:02}", now.month()))
      .join(format!("{:02}", now.day()));
    if !directory.exists() {
      std::fs::create_dir_all(&directory)?;
    }

    Ok(directory.join(format!(
      "{}-{:04X}.json",
      now.format("%H-%M-%S"),
      self.frame_id()?
    )))
  }
}

impl Publish<Detection2DArray> for DirectoryRecordOutput {
  type Error = DirectoryRecordOutputError;

  fn publish(&self, message: &Detection2DArray) -> Result<(), Self::Error> {
    if !self.always && message.is_empty() {
      return Ok(());
    }

    let path = self.frame_path()?;
    std::fs::write(&path, serde_json::to_string_pretty(message)?)?;
    debug!("记录 {} 个检测到 {}", message.len(), path.display());
    Ok(())
  }
}
