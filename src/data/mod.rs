//! Dataset access.
//!
//! The store itself is in [`store`]; [`loader`] reads it from disk.

pub mod loader;
pub mod store;

pub use loader::{load_data, DataPaths};
pub use store::{
    CountryLookup, CountryRecord, DataStore, DataStoreBuilder, GeoShapes, TemporalRecord,
    TotalRecord,
};
