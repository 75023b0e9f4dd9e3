// 该文件是 Shanan （山南西风） 项目的一部分。
// src/msg.rs - 二维检测消息定义
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

//! 与 ROS 2 `vision_msgs` / `std_msgs` 字段布局一致的消息结构。
//!
//! 这里只描述内存中的值，序列化后的 JSON 字段名与 ROS 消息字段名一一对应，
//! 下游桥接程序可以直接映射。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: u32 = 1_000_000_000;
const POSE_COVARIANCE_LEN: usize = 36;

/// `builtin_interfaces/Time`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
  pub sec: i32,
  pub nanosec: u32,
}

impl Time {
  pub fn new(sec: i32, nanosec: u32) -> Self {
    Self { sec, nanosec }
  }

  /// 当前系统时间
  pub fn now() -> Self {
    Self::from(Utc::now())
  }

  /// 由毫秒时间戳构造，负值向下取整到整秒
  pub fn from_millis(millis: i64) -> Self {
    Self::saturating(
      millis.div_euclid(1000),
      (millis.rem_euclid(1000) * 1_000_000) as u32,
    )
  }

  /// 秒数超出 i32 范围时饱和到最早或最晚的可表示时间
  fn saturating(sec: i64, nanosec: u32) -> Self {
    match i32::try_from(sec) {
      Ok(sec) => Self { sec, nanosec },
      Err(_) if sec > 0 => Self::new(i32::MAX, NANOS_PER_SEC - 1),
      Err(_) => Self::new(i32::MIN, 0),
    }
  }
}

impl From<DateTime<Utc>> for Time {
  fn from(time: DateTime<Utc>) -> Self {
    // 闰秒时 chrono 的亚秒部分可能超过 1 秒
    Self::saturating(
      time.timestamp(),
      time.timestamp_subsec_nanos().min(NANOS_PER_SEC - 1),
    )
  }
}

/// `std_msgs/Header`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
  pub stamp: Time,
  pub frame_id: String,
}

impl Header {
  pub fn new(stamp: Time, frame_id: impl Into<String>) -> Self {
    Self {
      stamp,
      frame_id: frame_id.into(),
    }
  }

  /// 以当前时间为时间戳
  pub fn now(frame_id: impl Into<String>) -> Self {
    Self::new(Time::now(), frame_id)
  }
}

/// `vision_msgs/Point2D`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
  pub x: f64,
  pub y: f64,
}

/// `vision_msgs/Pose2D`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
  pub position: Point2D,
  pub theta: f64,
}

/// `vision_msgs/BoundingBox2D`，以中心点和尺寸描述
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
  pub center: Pose2D,
  pub size_x: f64,
  pub size_y: f64,
}

/// `vision_msgs/ObjectHypothesis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectHypothesis {
  pub class_id: String,
  pub score: f64,
}

/// `geometry_msgs/Point`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// `geometry_msgs/Quaternion`，默认值为单位四元数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
  pub x: f64,
  pub y: f64,
  pub z: f64,
  pub w: f64,
}

impl Default for Quaternion {
  fn default() -> Self {
    Self {
      x: 0.0,
      y: 0.0,
      z: 0.0,
      w: 1.0,
    }
  }
}

/// `geometry_msgs/Pose`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
  pub position: Point,
  pub orientation: Quaternion,
}

/// `geometry_msgs/PoseWithCovariance`，协方差为 6x6 行主序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseWithCovariance {
  pub pose: Pose,
  pub covariance: Vec<f64>,
}

impl Default for PoseWithCovariance {
  fn default() -> Self {
    Self {
      pose: Pose::default(),
      covariance: vec![0.0; POSE_COVARIANCE_LEN],
    }
  }
}

/// `vision_msgs/ObjectHypothesisWithPose`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectHypothesisWithPose {
  pub hypothesis: ObjectHypothesis,
  pub pose: PoseWithCovariance,
}

/// `vision_msgs/Detection2D`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection2D {
  pub header: Header,
  pub results: Vec<ObjectHypothesisWithPose>,
  pub bbox: BoundingBox2D,
  /// 跟踪 ID，检测阶段为空
  pub id: String,
}

/// `vision_msgs/Detection2DArray`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection2DArray {
  pub header: Header,
  pub detections: Vec<Detection2D>,
}

impl Detection2DArray {
  pub fn len(&self) -> usize {
    self.detections.len()
  }

  pub fn is_empty(&self) -> bool {
    self.detections.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn time_from_millis_splits_seconds() {
    assert_eq!(Time::from_millis(1_500), Time::new(1, 500_000_000));
    assert_eq!(Time::from_millis(0), Time::new(0, 0));
    assert_eq!(Time::from_millis(-1), Time::new(-1, 999_000_000));
  }

  #[test]
  fn time_from_datetime_keeps_subsecond_part() {
    let time = DateTime::from_timestamp(1_234_567_890, 123_456_789).unwrap();
    assert_eq!(Time::from(time), Time::new(1_234_567_890, 123_456_789));
  }

  #[test]
  fn out_of_range_seconds_saturate() {
    assert_eq!(
      Time::from_millis(i64::MAX),
      Time::new(i32::MAX, 999_999_999)
    );
    assert_eq!(Time::from_millis(i64::MIN), Time::new(i32::MIN, 0));
    assert_eq!(
      Time::from_millis(i64::from(i32::MAX) * 1000 + 250),
      Time::new(i32::MAX, 250_000_000)
    );

    let after_2038 = DateTime::from_timestamp(i64::from(i32::MAX) + 1, 5).unwrap();
    assert_eq!(Time::from(after_2038), Time::new(i32::MAX, 999_999_999));
  }

  #[test]
  fn header_now_sets_frame_id() {
    let header = Header::now("camera_link");
    assert_eq!(header.frame_id, "camera_link");
    assert!(header.stamp.nanosec < NANOS_PER_SEC);
  }

  #[test]
  fn default_pose_has_identity_orientation() {
    let pose = PoseWithCovariance::default();
    assert_eq!(pose.pose.orientation.w, 1.0);
    assert_eq!(pose.covariance.len(), 36);
    assert!(pose.covariance.iter().all(|v| *v == 0.0));
  }

  #[test]
  fn json_field_names_follow_ros_layout() {
    let detection = Detection2D {
      header: Header::new(Time::new(1, 2), "map"),
      bbox: BoundingBox2D {
        center: Pose2D {
          position: Point2D { x: 3.0, y: 4.0 },
          theta: 0.0,
        },
        size_x: 5.0,
        size_y: 6.0,
      },
      ..Default::default()
    };

    let value = serde_json::to_value(&detection).unwrap();
    assert_eq!(value["header"]["stamp"]["sec"], 1);
    assert_eq!(value["header"]["stamp"]["nanosec"], 2);
    assert_eq!(value["header"]["frame_id"], "map");
    assert_eq!(value["bbox"]["center"]["position"]["x"], 3.0);
    assert_eq!(value["bbox"]["center"]["position"]["y"], 4.0);
    assert_eq!(value["bbox"]["size_x"], 5.0);
    assert_eq!(value["bbox"]["size_y"], 6.0);
    assert_eq!(value["id"], "");
  }
}
