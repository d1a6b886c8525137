use serde::{Deserialize, Serialize};

/// The all-or-nothing video sub-record. Presence is detected by `platform`;
/// when a memory has no platform stored, the whole block is absent.
/// `timestamp` and `duration` are stored verbatim, units are the caller's.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VideoData {
	pub platform: String,
	pub timestamp: i64,
	pub duration: i64,
	#[serde(default)]
	pub video_title: String,
	#[serde(default)]
	pub video_url: String,
	#[serde(default)]
	pub thumbnail_url: String,
	#[serde(default)]
	pub formatted_timestamp: String,
}
