//! Shared front-end asset utilities for Boring Financial projects.
//!
//! Exposes the package-relative asset path table, the pinned CDN URLs, and
//! a fetcher that downloads the Font Awesome CSS and webfonts to disk.

pub mod api;
pub mod application;
pub mod assets;
pub mod cli;
pub mod domain;
pub mod utils;

pub use api::FetchConfig;
pub use application::{fetch_assets, fetch_font_awesome, FetchCoordinator};
pub use assets::{asset_paths, cdn_assets, get_asset_path, AssetCategory, FontAwesomeAssets};
pub use domain::{DownloadJob, FetchError};
