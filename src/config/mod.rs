use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://cafes.db";

#[derive(Clone, Debug)]
pub struct Config {
	pub server_host: String,
	pub server_port: u16,
	pub database_url: String,
	pub secret_key: String,
	pub max_pool_size: u32,
	pub csrf_enabled: bool,
}

impl Config {
	/// Load the configuration from the process environment
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_vars(|key| env::var(key).ok())
	}

	pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let secret_key = lookup("SECRET_KEY")
			.filter(|value| !value.is_empty())
			.ok_or(ConfigError::MissingSecretKey)?;

		Ok(Self {
			server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
			server_port: lookup("SERVER_PORT")
				.unwrap_or_else(|| "8080".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidPort)?,
			// DATABASE_URI is the name older deployments use
			database_url: ["DATABASE_URL", "DATABASE_URI"]
				.into_iter()
				.find_map(|key| lookup(key).filter(|value| !value.is_empty()))
				.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
			secret_key,
			max_pool_size: lookup("MAX_POOL_SIZE")
				.unwrap_or_else(|| "5".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidPoolSize)?,
			csrf_enabled: lookup("CSRF_ENABLED")
				.map(|value| {
					!matches!(value.to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
				})
				.unwrap_or(true),
		})
	}

	pub fn server_addr(&self) -> String {
		format!("{}:{}", self.server_host, self.server_port)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("SECRET_KEY must be set")]
	MissingSecretKey,
	#[error("Invalid port number")]
	InvalidPort,
	#[error("MAX_POOL_SIZE must be a number")]
	InvalidPoolSize,
}
