pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{name} not set in environment.")]
	MissingEnv { name: &'static str },
	#[error("{message}")]
	Validation { message: String },
}
