pub mod fetch_coordinator;

pub use fetch_coordinator::{fetch_assets, fetch_font_awesome, resolve_target_dir, FetchCoordinator};
