use uuid::Uuid;

use crate::{Result, WebclipService};
use webclip_storage::queries;

impl WebclipService {
	/// Links cascade with the memory; a repeated delete is NotFound with no
	/// side effect.
	pub async fn delete_memory(&self, id: Uuid) -> Result<()> {
		queries::delete_memory(&self.db, id).await?;

		Ok(())
	}
}
