mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Query, Service, Upstream};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	for (label, value) in [
		("service.http_bind", &cfg.service.http_bind),
		("service.log_level", &cfg.service.log_level),
		("upstream.api_base", &cfg.upstream.api_base),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if !cfg.upstream.api_base.starts_with("http://") && !cfg.upstream.api_base.starts_with("https://")
	{
		return Err(Error::Validation {
			message: "upstream.api_base must be an http or https URL.".to_string(),
		});
	}
	if !cfg.upstream.path.is_empty() && !cfg.upstream.path.starts_with('/') {
		return Err(Error::Validation {
			message: "upstream.path must start with '/'.".to_string(),
		});
	}
	if cfg.upstream.fetch_limit == 0 {
		return Err(Error::Validation {
			message: "upstream.fetch_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.upstream.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "upstream.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (key, value) in &cfg.upstream.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("upstream.default_headers.{key} must be a string."),
			});
		}
	}

	if cfg.query.default_limit == 0 {
		return Err(Error::Validation {
			message: "query.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.query.default_limit > cfg.query.max_limit {
		return Err(Error::Validation {
			message: "query.default_limit must not exceed query.max_limit.".to_string(),
		});
	}
	if cfg.query.max_cached_queries == 0 {
		return Err(Error::Validation {
			message: "query.max_cached_queries must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.upstream.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.upstream.api_key = None;
	}

	let trimmed_len = cfg.upstream.api_base.trim_end_matches('/').len();

	cfg.upstream.api_base.truncate(trimmed_len);
}
