// 该文件是 Shanan （山南西风） 项目的一部分。
// src/input/jsonl_input.rs - JSON Lines 检测记录输入
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
  fs::File,
  io::{BufRead, BufReader},
};

use thiserror::Error;
use tracing::{error, info};
use url::Url;

use crate::{FromUrl, input::FrameRecord};

const JSONL_SCHEME: &str = "jsonl";
const STDIN_SCHEME: &str = "stdin";

#[derive(Error, Debug)]
pub enum JsonLinesInputError {
  #[error("URI 方案不匹配: {0}")]
  SchemeMismatch(String),
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("第 {line} 行解析失败: {source}")]
  Parse {
    line: usize,
    source: serde_json::Error,
  },
}

/// 每行一个 [`FrameRecord`]，空行忽略
pub struct JsonLinesInput {
  reader: Box<dyn BufRead + Send>,
  line: usize,
}

impl FromUrl for JsonLinesInput {
  type Error = JsonLinesInputError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    match url.scheme() {
      JSONL_SCHEME => {
        info!("打开检测记录文件: {}", url.path());
        let file = File::open(url.path())?;
        Ok(Self::from_reader(BufReader::new(file)))
      }
      STDIN_SCHEME => {
        info!("从标准输入读取检测记录");
        Ok(Self::stdin())
      }
      scheme => {
        error!(
          "URI scheme mismatch: expected '{}' or '{}', found '{}'",
          JSONL_SCHEME, STDIN_SCHEME, scheme
        );
        Err(JsonLinesInputError::SchemeMismatch(scheme.to_string()))
      }
    }
  }
}

impl JsonLinesInput {
  pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
    Self {
      reader: Box::new(reader),
      line: 0,
    }
  }

  pub fn stdin() -> Self {
    Self::from_reader(BufReader::new(std::io::stdin()))
  }
}

impl Iterator for JsonLinesInput {
  type Item = Result<FrameRecord, JsonLinesInputError>;

  fn next(&mut self) -> Option<Self::Item> {
    let mut buf = String::new();
    loop {
      buf.clear();
      match self.reader.read_line(&mut buf) {
        Ok(0) => return None,
        Ok(_) => {
          self.line += 1;
          let text = buf.trim();
          if text.is_empty() {
            continue;
          }
          let line = self.line;
          return Some(
            serde_json::from_str(text).map_err(|source| JsonLinesInputError::Parse { line, source }),
          );
        }
        Err(e) => return Some(Err(e.into())),
      }
    }
  }
}
