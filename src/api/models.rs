use std::path::PathBuf;

use crate::assets::FONT_AWESOME_CDN_BASE;

/// Configuration for a single fetch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Prefix the fixed asset suffixes are appended to.
    pub base_url: String,
    /// Where files land; `None` means `<cwd>/public/fonts`.
    pub target_dir: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: FONT_AWESOME_CDN_BASE.to_string(),
            target_dir: None,
            user_agent: format!("boring-assets/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn with_target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_dir = Some(dir.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
