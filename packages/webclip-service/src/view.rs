use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use webclip_domain::{tags, video::VideoData};
use webclip_storage::models::{LinkRow, MemoryRow};

/// The wire form of a memory: tags as a sequence, the video block assembled
/// from its nullable columns, links attached only on point lookups.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemoryView {
	pub id: Uuid,
	pub url: String,
	pub title: String,
	pub content_type: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub selected_text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub context_before: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub context_after: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub full_context: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub element_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_section: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub xpath: Option<String>,
	pub tags: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub scraped_at: OffsetDateTime,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub video_data: Option<VideoData>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<Vec<LinkView>>,
}
impl MemoryView {
	pub fn from_row(row: MemoryRow) -> Self {
		// The video block is present exactly when `platform` is stored; the
		// remaining columns default to empty when unset.
		let video_data = row.video_platform.map(|platform| VideoData {
			platform,
			timestamp: row.video_timestamp.unwrap_or_default(),
			duration: row.video_duration.unwrap_or_default(),
			video_title: row.video_title.unwrap_or_default(),
			video_url: row.video_url.unwrap_or_default(),
			thumbnail_url: row.thumbnail_url.unwrap_or_default(),
			formatted_timestamp: row.formatted_timestamp.unwrap_or_default(),
		});

		Self {
			id: row.id,
			url: row.url,
			title: row.title,
			content_type: row.content_type,
			content: row.content,
			selected_text: row.selected_text,
			context_before: row.context_before,
			context_after: row.context_after,
			full_context: row.full_context,
			element_type: row.element_type,
			page_section: row.page_section,
			xpath: row.xpath,
			tags: tags::split(row.tags.as_deref()),
			notes: row.notes,
			created_at: row.created_at,
			updated_at: row.updated_at,
			scraped_at: row.scraped_at,
			video_data,
			links: None,
		}
	}

	pub fn with_links(mut self, links: Vec<LinkRow>) -> Self {
		self.links = Some(links.into_iter().map(LinkView::from_row).collect());

		self
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LinkView {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	pub href: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}
impl LinkView {
	fn from_row(row: LinkRow) -> Self {
		Self { text: row.text, href: row.href, title: row.link_title, created_at: row.created_at }
	}
}
