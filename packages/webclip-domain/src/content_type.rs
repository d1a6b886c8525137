use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Classifier for a captured record. This is not a workflow state; it only
/// describes what the extension grabbed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
	Page,
	Selection,
	VideoTimestamp,
	Links,
	Custom,
}
impl ContentType {
	pub const ALL: [Self; 5] =
		[Self::Page, Self::Selection, Self::VideoTimestamp, Self::Links, Self::Custom];

	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Page => "page",
			Self::Selection => "selection",
			Self::VideoTimestamp => "video_timestamp",
			Self::Links => "links",
			Self::Custom => "custom",
		}
	}
}
impl FromStr for ContentType {
	type Err = Error;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw {
			"page" => Ok(Self::Page),
			"selection" => Ok(Self::Selection),
			"video_timestamp" => Ok(Self::VideoTimestamp),
			"links" => Ok(Self::Links),
			"custom" => Ok(Self::Custom),
			_ => Err(Error::UnknownContentType { value: raw.to_string() }),
		}
	}
}
impl fmt::Display for ContentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
