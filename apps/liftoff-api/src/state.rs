use std::sync::Arc;

use liftoff_config::Config;
use liftoff_service::LaunchService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<LaunchService>,
}
impl AppState {
	pub fn new(config: Config) -> Self {
		Self { service: Arc::new(LaunchService::new(config)) }
	}
}
