use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, MemoryView, Result, WebclipService};
use webclip_domain::{capture, content_type::ContentType, tags, video::VideoData};
use webclip_storage::{
	models::{MemoryRow, NewLink},
	queries,
};

/// The insert payload sent by the extension. Everything defaults so a
/// minimal capture of a bare page still round-trips.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CaptureRequest {
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content_type: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub selected_text: String,
	#[serde(default)]
	pub context_before: String,
	#[serde(default)]
	pub context_after: String,
	#[serde(default)]
	pub full_context: String,
	#[serde(default)]
	pub element_type: String,
	#[serde(default)]
	pub page_section: String,
	#[serde(default)]
	pub xpath: String,
	#[serde(default)]
	pub links: Vec<LinkInput>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub notes: String,
	#[serde(default, with = "crate::time_serde::option")]
	pub scraped_at: Option<OffsetDateTime>,
	#[serde(default)]
	pub video_data: Option<VideoData>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LinkInput {
	#[serde(default)]
	pub text: String,
	#[serde(default)]
	pub href: String,
	#[serde(default)]
	pub title: String,
}

impl WebclipService {
	/// The capture protocol: default, validate (with the browser-URL
	/// tolerance rule), then insert the memory and its links in one
	/// transaction and return the stored record re-read from the database.
	pub async fn capture(&self, req: CaptureRequest) -> Result<MemoryView> {
		let title = capture::default_title(req.title);
		let content_type = if req.content_type.is_empty() {
			ContentType::Page
		} else {
			ContentType::from_str(&req.content_type)?
		};
		let url = capture::resolve_url(&req.url)?;

		for link in &req.links {
			if link.href.is_empty() {
				return Err(Error::InvalidRequest {
					message: "Link href is required.".to_string(),
				});
			}
		}

		if let Some(video) = &req.video_data
			&& video.platform.is_empty()
		{
			return Err(Error::InvalidRequest {
				message: "video_data.platform is required.".to_string(),
			});
		}

		let now = OffsetDateTime::now_utc();
		let id = Uuid::new_v4();
		let memory = MemoryRow {
			id,
			url,
			title,
			content_type: content_type.as_str().to_string(),
			content: tags::optional(req.content),
			selected_text: tags::optional(req.selected_text),
			context_before: tags::optional(req.context_before),
			context_after: tags::optional(req.context_after),
			full_context: tags::optional(req.full_context),
			element_type: tags::optional(req.element_type),
			page_section: tags::optional(req.page_section),
			xpath: tags::optional(req.xpath),
			tags: tags::join(&req.tags),
			notes: tags::optional(req.notes),
			created_at: now,
			updated_at: now,
			scraped_at: req.scraped_at.unwrap_or(now),
			video_platform: req.video_data.as_ref().map(|video| video.platform.clone()),
			video_timestamp: req.video_data.as_ref().map(|video| video.timestamp),
			video_duration: req.video_data.as_ref().map(|video| video.duration),
			video_title: req.video_data.as_ref().map(|video| video.video_title.clone()),
			video_url: req.video_data.as_ref().map(|video| video.video_url.clone()),
			thumbnail_url: req.video_data.as_ref().map(|video| video.thumbnail_url.clone()),
			formatted_timestamp: req
				.video_data
				.as_ref()
				.map(|video| video.formatted_timestamp.clone()),
		};
		let links = req
			.links
			.into_iter()
			.map(|link| NewLink {
				text: tags::optional(link.text),
				href: link.href,
				link_title: tags::optional(link.title),
			})
			.collect::<Vec<_>>();

		queries::insert_memory(&self.db, &memory, &links).await?;

		let stored = queries::fetch_memory(&self.db, id).await?;
		let stored_links = queries::fetch_links(&self.db, id).await?;

		Ok(MemoryView::from_row(stored).with_links(stored_links))
	}
}
