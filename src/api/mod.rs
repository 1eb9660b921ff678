pub mod client;
pub mod models;

pub use client::{ApiError, AssetClient, Result};
pub use models::FetchConfig;
