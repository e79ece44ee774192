/// Data layer: core types, loading, statistics, and export.
///
/// Architecture:
/// ```text
///  datasets/*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table, validate required columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ DatasetCache  │  memoized per DatasetId, owned by the controller
///   └──────────────┘
///        │
///        ├──────────────┬───────────────┐
///        ▼              ▼               ▼
///   ┌──────────┐  ┌──────────┐   ┌──────────┐
///   │  stats    │  │  export   │   │ ui views  │
///   │ describe, │  │ table →   │   │ (charts,  │
///   │ corr, …   │  │ CSV bytes │   │  text)    │
///   └──────────┘  └──────────┘   └──────────┘
/// ```

pub mod catalog;
pub mod export;
pub mod loader;
pub mod model;
pub mod stats;
