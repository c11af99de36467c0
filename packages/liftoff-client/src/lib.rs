//! Client side of the launch feed: folds paged query results into one deduplicated,
//! year-grouped collection while guarding against stale and overlapping responses.

pub mod aggregator;
pub mod api;
pub mod debounce;
pub mod fetch_state;
pub mod session;

mod error;

pub use aggregator::Aggregator;
pub use api::{BoxFuture, HttpLaunchesApi, LaunchesApi, PageBody};
pub use debounce::{DebounceToken, Debouncer};
pub use error::{Error, Result};
pub use fetch_state::{FetchEvent, FetchStatus};
pub use session::{Applied, PageRequest, Session};

use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
