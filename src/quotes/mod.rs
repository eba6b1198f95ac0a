pub mod static_table;
pub mod traits;

pub use static_table::StaticQuotes;
pub use traits::SnapshotProvider;
