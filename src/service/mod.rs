//! Store implementations and derived views over Store rows.

mod postgres;
pub mod research;
pub use postgres::PgStore;
pub use research::category_summary;
