#[derive(Debug)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub security: Security,
}

#[derive(Debug)]
pub struct Service {
	pub port: u16,
	/// Set when the process runs on a serverless platform; missing required
	/// environment is fatal instead of falling back to dev defaults.
	pub production: bool,
}

#[derive(Debug)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	pub pool_min_conns: u32,
	pub connect_timeout_secs: u64,
}

#[derive(Debug)]
pub struct Security {
	pub jwt_secret: Option<String>,
}
