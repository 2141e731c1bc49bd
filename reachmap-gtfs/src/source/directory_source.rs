use std::path::{Path, PathBuf};

use super::{FeedResource, FeedSource, FetchError};

/// a feed unpacked into a local directory. tables that are not valid UTF-8,
/// such as Latin-1 exports, are decoded with replacement characters.
#[derive(Debug, Clone)]
pub struct DirectoryFeedSource {
    directory: PathBuf,
}

impl DirectoryFeedSource {
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
        }
    }
}

impl FeedSource for DirectoryFeedSource {
    fn fetch(&self, resource: FeedResource) -> Result<String, FetchError> {
        let filepath = self.directory.join(resource.filename());
        let bytes = std::fs::read(&filepath).map_err(|source| FetchError::Io {
            resource,
            path: filepath.to_string_lossy().to_string(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        format!("directory '{}'", self.directory.to_string_lossy())
    }
}
