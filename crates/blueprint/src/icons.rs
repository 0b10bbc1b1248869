//! Best-effort download of node icons.
//!
//! Icons are optional decoration: an icon that cannot be fetched leaves the
//! node drawn with its default shape. [`IconFetcher::ensure`] therefore never
//! returns an error. It downloads a missing icon at most once and logs any
//! failure at `warn`.
//!
//! Downloads go through the [`IconSource`] trait so the transport can be
//! replaced; [`HttpIconSource`] is the blocking HTTP implementation.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use tempfile::NamedTempFile;
use thiserror::Error;

/// A remote icon and the file name it is cached under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    name: &'static str,
    url: &'static str,
    file_name: &'static str,
}

impl Icon {
    pub const fn new(name: &'static str, url: &'static str, file_name: &'static str) -> Self {
        Self {
            name,
            url,
            file_name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn url(&self) -> &'static str {
        self.url
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

/// Why a single download attempt failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Transport used to retrieve icon bytes.
pub trait IconSource {
    /// Performs one request for `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for network failures and non-success statuses.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpIconSource {
    client: reqwest::blocking::Client,
}

impl HttpIconSource {
    /// Creates the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl IconSource for HttpIconSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

/// Downloads icons into a directory, skipping those already present.
#[derive(Debug)]
pub struct IconFetcher<S> {
    source: S,
    directory: PathBuf,
}

impl<S: IconSource> IconFetcher<S> {
    /// Creates a fetcher that caches icons in `directory`.
    pub fn new(source: S, directory: impl Into<PathBuf>) -> Self {
        Self {
            source,
            directory: directory.into(),
        }
    }

    /// Returns the underlying transport.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cache directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Local path `icon` is cached at.
    pub fn path_for(&self, icon: &Icon) -> PathBuf {
        self.directory.join(icon.file_name())
    }

    /// Makes sure `icon` is available locally.
    ///
    /// Returns the local path if the icon exists after this call, or `None`
    /// if it was missing and the single download attempt failed. A failed
    /// attempt leaves no file behind.
    pub fn ensure(&self, icon: &Icon) -> Option<PathBuf> {
        let path = self.path_for(icon);
        if path.exists() {
            debug!(icon = icon.name(), path = path.display().to_string(); "Icon already present");
            return Some(path);
        }

        match self.download(icon, &path) {
            Ok(()) => {
                info!(icon = icon.name(), path = path.display().to_string(); "Icon downloaded");
                Some(path)
            }
            Err(err) => {
                warn!(
                    icon = icon.name(),
                    url = icon.url(),
                    error:% = err;
                    "Icon download failed, the default shape will be used"
                );
                None
            }
        }
    }

    /// Calls [`ensure`](Self::ensure) for each icon and returns how many are available.
    pub fn ensure_all(&self, icons: &[Icon]) -> usize {
        icons
            .iter()
            .filter_map(|icon| self.ensure(icon))
            .count()
    }

    fn download(&self, icon: &Icon, path: &Path) -> Result<(), FetchError> {
        let bytes = self.source.fetch(icon.url())?;

        fs::create_dir_all(&self.directory)?;
        let mut staged = NamedTempFile::new_in(&self.directory)?;
        staged.write_all(&bytes)?;
        staged.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}
