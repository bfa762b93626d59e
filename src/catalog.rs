//! Where wallpaper records come from, and the validated index built on them.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use crate::builtin;
use crate::error::CatalogError;
use crate::record::WallpaperRecord;

/// A source of wallpaper records.
///
/// The builtin list and a local JSON file are the two implementations; any
/// other source has to produce the same record shape.
pub trait CatalogProvider {
    fn list_all(&self) -> Result<Vec<WallpaperRecord>, CatalogError>;

    /// Short label used in logs.
    fn describe(&self) -> String;
}

/// Records compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl CatalogProvider for BuiltinCatalog {
    fn list_all(&self) -> Result<Vec<WallpaperRecord>, CatalogError> {
        Ok(builtin::records())
    }

    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }
}

/// A JSON array of records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn list_all(&self) -> Result<Vec<WallpaperRecord>, CatalogError> {
        let data = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}

/// Immutable set of records keyed by date.
///
/// Construction enforces one record per date and per id, so a lookup can
/// never be ambiguous.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_date: BTreeMap<NaiveDate, WallpaperRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<WallpaperRecord>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut by_date = BTreeMap::new();

        for record in records {
            if !ids.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            let date = record.date;
            if by_date.insert(date, record).is_some() {
                return Err(CatalogError::DuplicateDate(date));
            }
        }

        Ok(Self { by_date })
    }

    pub fn load(provider: &dyn CatalogProvider) -> Result<Self, CatalogError> {
        let catalog = Self::from_records(provider.list_all()?)?;
        if catalog.is_empty() {
            log::warn!("{} has no wallpapers", provider.describe());
        }
        log::info!(
            "Loaded {} wallpapers from {}",
            catalog.len(),
            provider.describe()
        );
        Ok(catalog)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&WallpaperRecord> {
        self.by_date.get(&date)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    /// Records in ascending date order.
    pub fn records(&self) -> impl Iterator<Item = &WallpaperRecord> {
        self.by_date.values()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
