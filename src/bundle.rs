use crate::error::Error;
use crate::result::Result;
use std::path::{Component, Path};

/// Archive written when no output is given
pub const DEFAULT_ARCHIVE: &str = "extension.zip";

/// Extension assets packaged by default, in archive order
pub const DEFAULT_FILES: [&str; 10] = [
    "manifest.json",
    "background.js",
    "content.js",
    "popup.html",
    "popup.js",
    "styles/popup.css",
    "pages/unit-selection.html",
    "icon16.png",
    "icon48.png",
    "icon128.png",
];

/// Ordered relative paths to include in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionList {
    paths: Vec<String>,
}

impl InclusionList {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Archive entry names for every path, in list order.
    ///
    /// Fails on the first path that is absolute or leaves the base directory.
    pub fn entry_names(&self) -> Result<Vec<String>> {
        self.paths.iter().map(|path| entry_name(path)).collect()
    }
}

impl Default for InclusionList {
    fn default() -> Self {
        Self::new(DEFAULT_FILES)
    }
}

/// Archive entry name for a relative inclusion path, `/`-separated
pub fn entry_name(path: &str) -> Result<String> {
    let mut parts = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(part) => parts.push(part),
                None => return Err(Error::InvalidEntry(path.to_string())),
            },
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::InvalidEntry(path.to_string()));
            }
        }
    }

    if parts.is_empty() {
        return Err(Error::InvalidEntry(path.to_string()));
    }

    Ok(parts.join("/"))
}
