//! Catalog file loading.
//!
//! A catalog is the dataset behind one listing page (motorcycles, stores or
//! services), kept as a JSON file (or TOML when the path ends in `.toml`). It
//! is read once per session; nothing is ever written back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::{Catalog, CatalogError, CatalogFile};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON deserialization error.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file parsed but its items break catalog invariants.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// File format of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Picks the format from the file extension. Defaults to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => CatalogFormat::Toml,
            _ => CatalogFormat::Json,
        }
    }
}

/// Reads catalogs from disk.
///
/// # Example
///
/// ```no_run
/// use showroom_catalog::CatalogStore;
///
/// let store = CatalogStore::with_path("motorcycles.json".into());
/// let catalog = store.load()?;
/// println!("{} motorcycles", catalog.len());
/// # Ok::<(), showroom_catalog::CatalogStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Path to the catalog file.
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store for the given file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path to the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::ReadError` if the file cannot be read.
    /// - Returns `CatalogStoreError::Json` / `Toml` if the file is malformed.
    /// - Returns `CatalogStoreError::Catalog` if item ids are empty or repeated.
    pub fn load(&self) -> Result<Catalog> {
        let contents = fs::read_to_string(&self.path).map_err(|e| CatalogStoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        let format = CatalogFormat::from_path(&self.path);
        let catalog = parse_catalog(&contents, format)?;
        debug!(
            path = %self.path.display(),
            items = catalog.len(),
            buckets = catalog.price_buckets().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

/// Parses and validates catalog contents.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Catalog> {
    let file: CatalogFile = match format {
        CatalogFormat::Json => serde_json::from_str(contents)?,
        CatalogFormat::Toml => toml::from_str(contents)?,
    };
    Ok(Catalog::try_from(file)?)
}
