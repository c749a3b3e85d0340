//! pagedb - A tiny persistent single-table database.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                    pagedb                     │
//! ├───────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────┐  │
//! │  │        REPL (repl/, src/main.rs)        │  │
//! │  │   InputBuffer → MetaCommand/Statement   │  │
//! │  └─────────────────────────────────────────┘  │
//! │                       ↓                       │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │             Table (table/)              │  │
//! │  │  append-only rows + RowSlot addressing  │  │
//! │  └─────────────────────────────────────────┘  │
//! │                       ↓                       │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │          Page Store (storage/)          │  │
//! │  │   Pager (resident pages) + Page + Row   │  │
//! │  └─────────────────────────────────────────┘  │
//! │                       ↓                       │
//! │              single database file             │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error)
//! - [`storage`] - Page buffers, the fixed-width row codec, and the pager
//! - [`table`] - Row addressing and the append-only table
//! - [`repl`] - Line input and command preparation
//!
//! # Quick Start
//! ```no_run
//! use pagedb::{Row, Table};
//!
//! let mut table = Table::open("my_database.db").unwrap();
//! table.insert(&Row::new(1, "user1", "person1@example.com")).unwrap();
//! for row in table.scan().unwrap() {
//!     println!("{}", row.unwrap());
//! }
//! table.close().unwrap();
//! ```

pub mod common;
pub mod repl;
pub mod storage;
pub mod table;

// Re-export the common path at the crate root
pub use common::config::{MAX_FILE_SIZE, PAGE_SIZE, TABLE_MAX_PAGES};
pub use common::{Error, Result};

pub use storage::page::{Page, Row};
pub use storage::Pager;
pub use table::{RowSlot, Table, TableScan, ROWS_PER_PAGE, TABLE_MAX_ROWS};
