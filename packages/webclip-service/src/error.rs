pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<webclip_storage::Error> for Error {
	fn from(err: webclip_storage::Error) -> Self {
		match err {
			webclip_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			webclip_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}

impl From<webclip_domain::Error> for Error {
	fn from(err: webclip_domain::Error) -> Self {
		Self::InvalidRequest { message: err.to_string() }
	}
}
