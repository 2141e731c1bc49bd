use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use zip::{result::ZipError, ZipArchive};

use super::{FeedResource, FeedSource, FetchError};

/// a feed packaged as a GTFS zip archive. tables are read from the archive
/// root, or from a single nested folder when the archive was zipped with one.
/// entries that are not valid UTF-8 are decoded with replacement characters.
#[derive(Debug, Clone)]
pub struct ZipFeedSource {
    archive: PathBuf,
}

impl ZipFeedSource {
    pub fn new(archive: &Path) -> Self {
        Self {
            archive: archive.to_path_buf(),
        }
    }

    fn archive_name(&self) -> String {
        self.archive.to_string_lossy().to_string()
    }

    /// name of the archive entry holding this table, if any
    fn entry_name(archive: &ZipArchive<File>, resource: FeedResource) -> Option<String> {
        let filename = resource.filename();
        let nested_suffix = format!("/{filename}");
        archive
            .file_names()
            .find(|name| *name == filename || name.ends_with(&nested_suffix))
            .map(String::from)
    }
}

impl FeedSource for ZipFeedSource {
    fn fetch(&self, resource: FeedResource) -> Result<String, FetchError> {
        // each fetch opens its own handle so concurrent fetches never share a reader
        let file = File::open(&self.archive).map_err(|source| FetchError::Io {
            resource,
            path: self.archive_name(),
            source,
        })?;
        let mut archive = ZipArchive::new(file).map_err(|source| FetchError::Archive {
            path: self.archive_name(),
            source,
        })?;
        let entry_name =
            Self::entry_name(&archive, resource).ok_or_else(|| FetchError::MissingArchiveEntry {
                resource,
                path: self.archive_name(),
            })?;
        let mut entry = archive.by_name(&entry_name).map_err(|e| match e {
            ZipError::FileNotFound => FetchError::MissingArchiveEntry {
                resource,
                path: self.archive_name(),
            },
            source => FetchError::Archive {
                path: self.archive_name(),
                source,
            },
        })?;
        let mut bytes = vec![];
        entry
            .read_to_end(&mut bytes)
            .map_err(|source| FetchError::Io {
                resource,
                path: format!("{}:{entry_name}", self.archive_name()),
                source,
            })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        format!("zip archive '{}'", self.archive_name())
    }
}
