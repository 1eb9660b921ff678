use std::path::{Path, PathBuf};

/// One file to fetch: where it comes from and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    url: String,
    dest: PathBuf,
}

impl DownloadJob {
    pub fn new(url: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            dest: dest.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Destination basename, used to label logs and errors.
    pub fn file_name(&self) -> String {
        crate::utils::file_name_of(&self.dest)
    }
}
