// 该文件是 Shanan （山南西风） 项目的一部分。
// src/main.rs - 检测记录转换程序
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

use anyhow::Result;
use clap::Parser;
use url::Url;

use shanan_msgs::{
  FromUrl,
  input::JsonLinesInput,
  output::OutputWrapper,
  task::{ConvertTask, DEFAULT_FRAME_ID, Task},
};
use tracing::info;

/// 将检测记录转换为 Detection2DArray 消息
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 输入来源
  /// - JSON Lines 文件: jsonl:///path/to/records.jsonl
  /// - 标准输入: stdin:
  #[arg(long, value_name = "SOURCE", default_value = "stdin:")]
  pub input: Url,
  /// 输出路径
  /// - 标准输出: stdout:
  /// - JSON Lines 文件: jsonl:///path/to/out.jsonl[?append]
  /// - 目录记录: folder:///path/to/dir[?always]
  #[arg(long, value_name = "OUTPUT", default_value = "stdout:")]
  pub output: Url,
  /// 记录中未指定坐标系时使用的 frame_id
  #[arg(long, value_name = "FRAME_ID", default_value = DEFAULT_FRAME_ID)]
  pub frame_id: String,

  #[arg(long, value_name = "FRAME_NUMBER")]
  pub frame_number: Option<usize>,
}

fn main() -> Result<()> {
  // 标准输出可能承载消息，日志写到标准错误
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  info!("输入来源: {}", args.input);
  info!("输出路径: {}", args.output);
  info!("默认坐标系: {}", args.frame_id);

  let input = JsonLinesInput::from_url(&args.input)?;
  let output = OutputWrapper::from_url(&args.output)?;

  ConvertTask::default()
    .with_frame_number(args.frame_number)
    .with_frame_id(args.frame_id)
    .run_task(input, output)?;

  Ok(())
}
