pub mod engine;
pub mod filter;
pub mod launch_date;
pub mod normalize;
pub mod paginate;
pub mod projection;
pub mod record;
pub mod sort;

pub use filter::{LaunchFilter, StatusFilter, UnsupportedStatus};
pub use paginate::{Page, PageWindow};
pub use projection::YearGroup;
pub use record::{LaunchLinks, LaunchRecord, LaunchStatus};
