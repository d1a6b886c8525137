#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid URL: {url:?}.")]
	InvalidUrl { url: String },
	#[error("Unknown content type: {value:?}.")]
	UnknownContentType { value: String },
}
