use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{Result, WebclipService};
use webclip_storage::queries;

const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StatsResponse {
	pub total_memories: i64,
	pub by_content_type: HashMap<String, i64>,
	pub by_platform: HashMap<String, i64>,
	pub recent_count: i64,
}

impl WebclipService {
	/// Four independent counting queries. They read the database at four
	/// distinct snapshots; callers must not assume cross-query consistency.
	pub async fn stats(&self) -> Result<StatsResponse> {
		let total_memories = queries::total_count(&self.db).await?;
		let by_content_type =
			queries::count_by_content_type(&self.db).await?.into_iter().collect::<HashMap<_, _>>();
		let by_platform =
			queries::count_by_platform(&self.db).await?.into_iter().collect::<HashMap<_, _>>();
		let recent_count =
			queries::recent_count(&self.db, Duration::days(RECENT_WINDOW_DAYS)).await?;

		Ok(StatsResponse { total_memories, by_content_type, by_platform, recent_count })
	}
}
