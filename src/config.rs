//! Runtime configuration from environment variables
//!
//! - `BREAKFAST_DATA_DIR`: journal directory (default `./breakfast_data`)
//! - `BREAKFAST_CATALOG`: JSON catalog replacing the builtin one
//! - `BREAKFAST_RECIPES_DIR`: extra recipe JSON files added to the builtin book
//! - `BREAKFAST_LOG`: log filter, takes precedence over `RUST_LOG`

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::journal::Journal;
use crate::recipes::RecipeBook;
use crate::store::FileStore;

pub const DEFAULT_DATA_DIR: &str = "./breakfast_data";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub recipes_dir: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            recipes_dir: None,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: var("BREAKFAST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            catalog_path: var("BREAKFAST_CATALOG").map(PathBuf::from),
            recipes_dir: var("BREAKFAST_RECIPES_DIR").map(PathBuf::from),
            log_filter: var("BREAKFAST_LOG"),
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  BREAKFAST_DATA_DIR: {:?}", self.data_dir);
        tracing::info!("  BREAKFAST_CATALOG: {:?}", self.catalog_path);
        tracing::info!("  BREAKFAST_RECIPES_DIR: {:?}", self.recipes_dir);
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog from {:?}", path)),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Builtin recipes plus any found in `recipes_dir`
    pub fn load_recipes(&self) -> Result<RecipeBook> {
        let mut book = RecipeBook::builtin();
        if let Some(dir) = &self.recipes_dir {
            book.load_dir(dir)
                .with_context(|| format!("Failed to load recipes from {:?}", dir))?;
        }
        Ok(book)
    }

    pub fn open_journal(&self) -> Result<Journal<FileStore>> {
        let store = FileStore::open(&self.data_dir)
            .with_context(|| format!("Failed to open data directory {:?}", self.data_dir))?;
        Journal::open(store, Default::default())
            .with_context(|| format!("Failed to read journal in {:?}", self.data_dir))
    }
}
