pub mod schema;
pub mod engine;
pub mod row_major;
pub mod column_major;
pub mod catalog;
pub mod codec;

// Re-export main types for convenience
pub use schema::{Schema, Column};
pub use catalog::{Catalog, Table};
pub use engine::TableStorage;
pub use row_major::RowMajorStorage;
pub use column_major::ColumnMajorStorage;
