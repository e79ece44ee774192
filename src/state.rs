use crate::data::catalog::{DatasetCache, DatasetId};
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. One dataset is active at a
/// time; everything loaded so far stays memoized in the cache.
pub struct AppState {
    /// Currently selected dataset.
    pub selected: DatasetId,

    /// Memoized loads, keyed by dataset identifier.
    pub cache: DatasetCache,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected: DatasetId::Iris,
            cache: DatasetCache::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Switch the active dataset and run the load step. On failure the
    /// previous table stays cached and the error lands in the top bar.
    pub fn select(&mut self, id: DatasetId) {
        self.selected = id;
        match self.cache.get_or_load(id) {
            Ok(_) => {
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to load {}: {e:#}", id.label());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// The active dataset's table, if its load succeeded.
    pub fn current_table(&self) -> Option<&Table> {
        self.cache.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn select_surfaces_load_errors_without_a_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState {
            cache: DatasetCache::new(dir.path()),
            ..Default::default()
        };

        state.select(DatasetId::Titanic);
        assert!(state.current_table().is_none());
        assert!(state.status_message.as_deref().unwrap_or("").contains("Error"));
    }

    #[test]
    fn select_clears_the_previous_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DatasetId::Iris.file_path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "Id,SepalLengthCm,SepalWidthCm,PetalLengthCm,PetalWidthCm,Species\n\
             1,5.1,3.5,1.4,0.2,Iris-setosa\n",
        )
        .unwrap();

        let mut state = AppState {
            cache: DatasetCache::new(dir.path()),
            ..Default::default()
        };

        state.select(DatasetId::Titanic);
        assert!(state.status_message.is_some());

        state.select(DatasetId::Iris);
        assert!(state.status_message.is_none());
        assert_eq!(state.current_table().unwrap().len(), 1);
    }
}
