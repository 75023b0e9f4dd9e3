// 该文件是 Shanan （山南西风） 项目的一部分。
// tests/detection_converter.rs - 检测转换测试
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

use shanan_msgs::{
  detection::{BBox, DetectItem, DetectResult, DetectionResult},
  label::{CocoLabel, WithLabel},
  msg::{Header, Time},
  to_detection_2d, to_detection_2d_array,
};

fn header() -> Header {
  Header::new(Time::new(1_234_567_890, 123_456_789), "camera_link")
}

#[test]
fn single_detection_conversion() {
  let det = DetectionResult::new(BBox::new(100, 200, 50, 80), 0.85, 42, "person");

  let msg = to_detection_2d(&det, &header(), 640, 480);

  assert_eq!(msg.bbox.center.position.x, 125.0);
  assert_eq!(msg.bbox.center.position.y, 240.0);
  assert_eq!(msg.bbox.size_x, 50.0);
  assert_eq!(msg.bbox.size_y, 80.0);

  assert_eq!(msg.results.len(), 1);
  assert_eq!(msg.results[0].hypothesis.class_id, "person");
  assert_eq!(msg.results[0].hypothesis.score as f32, 0.85f32);

  assert_eq!(msg.header.frame_id, "camera_link");
}

#[test]
fn empty_detections_array() {
  let empty: Vec<DetectionResult> = Vec::new();

  let msg = to_detection_2d_array(&empty, &header(), 640, 480);

  assert!(msg.detections.is_empty());
  assert_eq!(msg.header.frame_id, "camera_link");
}

#[test]
fn multiple_detections() {
  let dets = vec![
    DetectionResult::new(BBox::new(10, 20, 30, 40), 0.9, 0, "car"),
    DetectionResult::new(BBox::new(100, 200, 50, 60), 0.7, 1, "truck"),
  ];

  let msg = to_detection_2d_array(&dets, &header(), 1920, 1080);

  assert_eq!(msg.detections.len(), 2);
  assert_eq!(msg.detections[0].results[0].hypothesis.class_id, "car");
  assert_eq!(msg.detections[1].results[0].hypothesis.class_id, "truck");
}

#[test]
fn coordinate_integrity() {
  let det = DetectionResult {
    bbox: BBox::new(0, 0, 100, 100),
    confidence: 1.0,
    class_id: 0,
    ..Default::default()
  };

  let msg = to_detection_2d(&det, &header(), 1000, 1000);

  assert_eq!(msg.bbox.center.position.x, 50.0);
  assert_eq!(msg.bbox.center.position.y, 50.0);
  assert_eq!(msg.results[0].hypothesis.class_id, "");
}

#[test]
fn model_output_to_message() {
  let result = DetectResult {
    items: vec![DetectItem {
      kind: CocoLabel::from_label_id(0),
      score: 0.5,
      bbox: [0.125, 0.25, 0.5, 0.75],
    }]
    .into_boxed_slice(),
  };

  let dets = result.to_detection_results(640, 480);
  let msg = to_detection_2d_array(&dets, &header(), 640, 480);

  assert_eq!(msg.detections.len(), 1);
  let detection = &msg.detections[0];
  assert_eq!(detection.bbox.center.position.x, 200.0);
  assert_eq!(detection.bbox.center.position.y, 240.0);
  assert_eq!(detection.bbox.size_x, 240.0);
  assert_eq!(detection.bbox.size_y, 240.0);
  assert_eq!(detection.results[0].hypothesis.class_id, "person");
  assert_eq!(detection.results[0].hypothesis.score, 0.5);
  assert_eq!(detection.header, header());
}
