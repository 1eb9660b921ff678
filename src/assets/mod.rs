//! Shared asset locations for Boring Financial projects: package-relative
//! paths for bundled images, icons, fonts and logos, and the pinned CDN
//! URLs for assets loaded remotely.

use serde::Serialize;

/// Pinned Font Awesome release on cdnjs.
pub const FONT_AWESOME_CDN_BASE: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0-beta3";

/// (URL suffix, destination basename) for every Font Awesome file we ship.
pub const FONT_AWESOME_FILES: [(&str, &str); 4] = [
    ("/css/all.min.css", "font-awesome.css"),
    ("/webfonts/fa-solid-900.woff2", "fa-solid-900.woff2"),
    ("/webfonts/fa-regular-400.woff2", "fa-regular-400.woff2"),
    ("/webfonts/fa-brands-400.woff2", "fa-brands-400.woff2"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Images,
    Icons,
    Fonts,
    Logos,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Images,
        AssetCategory::Icons,
        AssetCategory::Fonts,
        AssetCategory::Logos,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AssetCategory::Images => "@boring-financial/assets/src/assets/images",
            AssetCategory::Icons => "@boring-financial/assets/src/assets/icons",
            AssetCategory::Fonts => "@boring-financial/assets/src/assets/fonts",
            AssetCategory::Logos => "@boring-financial/assets/src/assets/logos",
        }
    }
}

/// Package-relative path of `filename` within `category`.
pub fn get_asset_path(category: AssetCategory, filename: &str) -> String {
    format!("{}/{}", category.path(), filename)
}

/// Category to path, in declaration order.
pub fn asset_paths() -> Vec<(AssetCategory, &'static str)> {
    AssetCategory::ALL
        .iter()
        .map(|category| (*category, category.path()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontAwesomeAssets {
    pub css: String,
    pub solid_font: String,
    pub regular_font: String,
    pub brands_font: String,
}

impl FontAwesomeAssets {
    pub fn at(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let [css, solid, regular, brands] =
            FONT_AWESOME_FILES.map(|(suffix, _)| format!("{base}{suffix}"));
        Self {
            css,
            solid_font: solid,
            regular_font: regular,
            brands_font: brands,
        }
    }

    pub fn urls(&self) -> [&str; 4] {
        [
            &self.css,
            &self.solid_font,
            &self.regular_font,
            &self.brands_font,
        ]
    }
}

/// CDN URLs for the pinned Font Awesome release.
pub fn cdn_assets() -> FontAwesomeAssets {
    FontAwesomeAssets::at(FONT_AWESOME_CDN_BASE)
}
