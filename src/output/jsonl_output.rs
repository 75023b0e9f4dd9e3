// 该文件是 Shanan （山南西风） 项目的一部分。
// src/output/jsonl_output.rs - JSON Lines 消息输出
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

use std::{
  fs::OpenOptions,
  io::Write,
  path::Path,
  sync::Mutex,
};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::{FromUrl, FromUrlWithScheme, output::Publish};

#[derive(Error, Debug)]
pub enum JsonLinesOutputError {
  #[error("URI 方案不匹配: {0}")]
  SchemeMismatch(String),
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("序列化错误: {0}")]
  SerializeError(#[from] serde_json::Error),
  #[error("输出锁已失效")]
  LockPoisoned,
}

/// 每条消息序列化为一行 JSON，写入标准输出或文件
pub struct JsonLinesOutput {
  target: String,
  writer: Mutex<Box<dyn Write + Send>>,
}

impl FromUrlWithScheme for JsonLinesOutput {
  const SCHEME: &'static str = "jsonl";
}

impl FromUrl for JsonLinesOutput {
  type Error = JsonLinesOutputError;

  fn from_url(uri: &Url) -> Result<Self, Self::Error> {
    if uri.scheme() == Self::STDOUT_SCHEME {
      return Ok(Self::from_writer("stdout", std::io::stdout()));
    }

    if uri.scheme() != Self::SCHEME {
      return Err(JsonLinesOutputError::SchemeMismatch(format!(
        "期望输出方式 '{}' 或 '{}', 实际输出方式 '{}'",
        Self::SCHEME,
        Self::STDOUT_SCHEME,
        uri.scheme()
      )));
    }

    let path = uri.path();
    if let Some(parent) = Path::new(path).parent()
      && !parent.as_os_str().is_empty()
    {
      std::fs::create_dir_all(parent)?;
    }

    let append = uri.query_pairs().any(|(k, _)| k == "append");
    let file = OpenOptions::new()
      .create(true)
      .write(true)
      .append(append)
      .truncate(!append)
      .open(path)?;
    info!("输出检测消息到文件: {} (追加: {})", path, append);

    Ok(Self::from_writer(path, file))
  }
}

impl JsonLinesOutput {
  pub const STDOUT_SCHEME: &'static str = "stdout";

  pub fn from_writer<W: Write + Send + 'static>(target: impl Into<String>, writer: W) -> Self {
    Self {
      target: target.into(),
      writer: Mutex::new(Box::new(writer)),
    }
  }

  pub fn target(&self) -> &str {
    &self.target
  }
}

impl<M: Serialize> Publish<M> for JsonLinesOutput {
  type Error = JsonLinesOutputError;

  fn publish(&self, message: &M) -> Result<(), Self::Error> {
    let line = serde_json::to_string(message)?;
    let mut writer = self
      .writer
      .lock()
      .map_err(|_| JsonLinesOutputError::LockPoisoned)?;
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    debug!("写入 {} 字节到 {}", line.len() + 1, self.target);
    Ok(())
  }
}
