//! Table layer: row addressing and the append-only row store.

#[allow(clippy::module_inception)]
mod table;

pub use table::{RowSlot, Table, TableScan, ROWS_PER_PAGE, TABLE_MAX_ROWS};
