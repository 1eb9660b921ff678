use std::path::{Path, PathBuf};

/// `<cwd>/public/fonts`, the directory assets land in when none is given.
pub fn default_target_dir() -> std::io::Result<PathBuf> {
    Ok(std::env::current_dir()?.join("public").join("fonts"))
}

/// Basename of `path` as an owned string, empty when there is none.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_dir() {
        let expected = std::env::current_dir()
            .unwrap()
            .join("public")
            .join("fonts");
        assert_eq!(default_target_dir().unwrap(), expected);
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(
            file_name_of(Path::new("/test/fonts/fa-solid-900.woff2")),
            "fa-solid-900.woff2"
        );
        assert_eq!(file_name_of(Path::new("/")), "");
    }
}
