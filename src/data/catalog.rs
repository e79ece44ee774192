use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::loader;
use super::model::Table;

// ---------------------------------------------------------------------------
// DataError – everything that can go wrong between selection and table
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset file not found: {path}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown dataset: {0:?}")]
    UnknownDataset(String),

    #[error("{dataset} dataset is missing required column {column:?}")]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
    },

    #[error("{dataset} dataset is empty")]
    EmptyDataset { dataset: &'static str },

    #[error(transparent)]
    Malformed(#[from] anyhow::Error),
}

// ---------------------------------------------------------------------------
// DatasetId – the four datasets the dashboard knows about
// ---------------------------------------------------------------------------

/// Identifier of one of the fixed datasets. Selection, loading, and view
/// dispatch are all keyed on this enum; there is no way to ask the cache
/// for anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatasetId {
    Iris,
    Titanic,
    RedWine,
    WhiteWine,
}

impl DatasetId {
    pub const ALL: [DatasetId; 4] = [
        DatasetId::Iris,
        DatasetId::Titanic,
        DatasetId::RedWine,
        DatasetId::WhiteWine,
    ];

    /// Display label, also the identifier accepted by [`DatasetId::from_label`].
    pub fn label(self) -> &'static str {
        match self {
            DatasetId::Iris => "Iris",
            DatasetId::Titanic => "Titanic",
            DatasetId::RedWine => "Red Wine Quality",
            DatasetId::WhiteWine => "White Wine Quality",
        }
    }

    /// Source file, relative to the cache's base directory.
    pub fn file_path(self) -> &'static str {
        match self {
            DatasetId::Iris => "datasets/iris.csv",
            DatasetId::Titanic => "datasets/titanic.csv",
            DatasetId::RedWine => "datasets/winequality_red.csv",
            DatasetId::WhiteWine => "datasets/winequality_white.csv",
        }
    }

    /// Field delimiter of the source file.
    pub fn delimiter(self) -> u8 {
        b','
    }

    /// Columns the dataset's view handler dereferences. Validated at load
    /// time so a malformed file fails there instead of mid-render.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            DatasetId::Iris => &[
                "Id",
                "SepalLengthCm",
                "SepalWidthCm",
                "PetalLengthCm",
                "PetalWidthCm",
                "Species",
            ],
            DatasetId::Titanic => &["Survived", "Pclass", "Sex", "Age", "Fare"],
            DatasetId::RedWine | DatasetId::WhiteWine => &["quality", "alcohol"],
        }
    }

    /// Parse a user-supplied identifier. Unknown names are rejected here,
    /// at the input boundary, instead of surfacing later as a missing table.
    pub fn from_label(label: &str) -> Result<Self, DataError> {
        Self::ALL
            .into_iter()
            .find(|id| id.label() == label)
            .ok_or_else(|| DataError::UnknownDataset(label.to_string()))
    }
}

// ---------------------------------------------------------------------------
// DatasetCache – memoized load, keyed by identifier
// ---------------------------------------------------------------------------

/// Owns every table loaded so far. Repeated selections of the same dataset
/// return the cached parse; the file is read at most once per identifier
/// for the lifetime of the cache.
pub struct DatasetCache {
    base_dir: PathBuf,
    loaded: BTreeMap<DatasetId, Table>,
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DatasetCache {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        DatasetCache {
            base_dir: base_dir.as_ref().to_path_buf(),
            loaded: BTreeMap::new(),
        }
    }

    /// The table for `id`, parsing its file on the first request.
    pub fn get_or_load(&mut self, id: DatasetId) -> Result<&Table, DataError> {
        if !self.loaded.contains_key(&id) {
            let path = self.base_dir.join(id.file_path());
            let table = loader::load(id, &path)?;
            log::info!(
                "loaded {} ({} rows, {} columns)",
                id.label(),
                table.len(),
                table.column_names.len()
            );
            self.loaded.insert(id, table);
        }
        Ok(&self.loaded[&id])
    }

    /// The table for `id` if it has already been loaded.
    pub fn get(&self, id: DatasetId) -> Option<&Table> {
        self.loaded.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn from_label_accepts_all_four() {
        for id in DatasetId::ALL {
            assert_eq!(DatasetId::from_label(id.label()).unwrap(), id);
        }
    }

    #[test]
    fn from_label_rejects_unknown() {
        let err = DatasetId::from_label("Penguins").unwrap_err();
        assert!(matches!(err, DataError::UnknownDataset(name) if name == "Penguins"));
    }

    #[test]
    fn missing_file_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DatasetCache::new(dir.path());
        let err = cache.get_or_load(DatasetId::Iris).unwrap_err();
        assert!(matches!(err, DataError::MissingFile { .. }));
    }

    #[test]
    fn all_four_datasets_load_with_required_columns() {
        let dir = tempfile::tempdir().unwrap();
        let contents: [(DatasetId, &str); 4] = [
            (
                DatasetId::Iris,
                "Id,SepalLengthCm,SepalWidthCm,PetalLengthCm,PetalWidthCm,Species\n\
                 1,5.1,3.5,1.4,0.2,Iris-setosa\n",
            ),
            (
                DatasetId::Titanic,
                "PassengerId,Survived,Pclass,Name,Sex,Age,Fare\n\
                 1,0,3,Braund,male,22,7.25\n",
            ),
            (DatasetId::RedWine, "quality,alcohol\n5,9.4\n"),
            (DatasetId::WhiteWine, "quality,alcohol\n6,10.1\n"),
        ];
        for (id, csv) in contents {
            let path = dir.path().join(id.file_path());
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, csv).unwrap();
        }

        let mut cache = DatasetCache::new(dir.path());
        for id in DatasetId::ALL {
            let table = cache.get_or_load(id).unwrap();
            assert!(!table.is_empty());
            for column in id.required_columns() {
                assert!(table.column_index(column).is_some(), "missing {column}");
            }
        }
    }

    #[test]
    fn get_or_load_memoizes_by_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DatasetId::RedWine.file_path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "quality,alcohol\n5,9.4\n6,9.8\n").unwrap();

        let mut cache = DatasetCache::new(dir.path());
        let first = cache.get_or_load(DatasetId::RedWine).unwrap().clone();

        // Clobber the file; the cached parse must survive untouched.
        fs::write(&path, "quality,alcohol\n3,8.0\n").unwrap();
        let second = cache.get_or_load(DatasetId::RedWine).unwrap();

        assert_eq!(&first, second);
        assert_eq!(second.len(), 2);
    }
}
