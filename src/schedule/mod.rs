pub mod client;
pub mod config;
pub mod time;
pub mod types;

pub use client::{ApiError, ScheduleClient};
pub use config::{AppConfig, load_config};
pub use time::{TimeZoneParam, format_override_time};
pub use types::{OverrideChange, OverrideError, TargetInput, UserOverride};
