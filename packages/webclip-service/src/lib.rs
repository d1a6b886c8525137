pub mod capture;
pub mod delete;
pub mod get;
pub mod items;
pub mod list;
pub mod scraped;
pub mod search;
pub mod stats;
pub mod time_serde;
pub mod update;
pub mod view;

mod error;

pub use capture::{CaptureRequest, LinkInput};
pub use error::{Error, Result};
pub use items::{CreateItemRequest, ItemFilter, ItemView, UpdateItemRequest};
pub use list::{ListRequest, ListResponse};
pub use scraped::{
	CreateScrapedDataRequest, ScrapedDataFilter, ScrapedDataListResponse, ScrapedDataView,
	UpdateScrapedDataRequest,
};
pub use search::SearchRequest;
pub use stats::StatsResponse;
pub use update::UpdateRequest;
pub use view::{LinkView, MemoryView};

use webclip_storage::db::Db;

pub struct WebclipService {
	pub db: Db,
}
impl WebclipService {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}

/// Normalizes an optional wire field: blank means "not provided".
pub(crate) fn present(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.is_empty())
}
