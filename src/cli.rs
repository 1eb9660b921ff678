//! Command line interface definition

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::api::FetchConfig;
use crate::assets::{asset_paths, cdn_assets, AssetCategory, FontAwesomeAssets};

/// boring-assets - shared asset helper for Boring Financial projects
#[derive(Parser, Debug)]
#[command(name = "boring-assets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Download Font Awesome assets and inspect shared asset paths")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the Font Awesome CSS and webfonts (the default command)
    Fetch {
        /// Directory to write into [default: ./public/fonts]
        #[arg(long, value_name = "DIR")]
        target_dir: Option<PathBuf>,

        /// Override the CDN prefix the asset paths are appended to
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Print the asset path and CDN tables as JSON
    Paths,
}

impl Commands {
    /// Fetch configuration for this command, if it fetches anything.
    pub fn fetch_config(&self) -> Option<FetchConfig> {
        match self {
            Commands::Fetch {
                target_dir,
                base_url,
            } => {
                let mut config = FetchConfig {
                    target_dir: target_dir.clone(),
                    ..FetchConfig::default()
                };
                if let Some(base_url) = base_url {
                    config = config.with_base_url(base_url.clone());
                }
                Some(config)
            }
            Commands::Paths => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssetTables {
    pub assets: BTreeMap<AssetCategory, &'static str>,
    pub cdn: CdnTables,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnTables {
    pub font_awesome: FontAwesomeAssets,
}

impl AssetTables {
    pub fn current() -> Self {
        Self {
            assets: asset_paths().into_iter().collect(),
            cdn: CdnTables {
                font_awesome: cdn_assets(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
