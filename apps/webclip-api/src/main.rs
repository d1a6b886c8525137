#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	webclip_api::run().await
}
