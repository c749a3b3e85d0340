//! Page and row layout.
//!
//! This module contains:
//! - [`Page`] - The raw 4KB data container
//! - [`Row`] - The fixed-width record and its byte-level codec

#[allow(clippy::module_inception)]
mod page;
mod row;

pub use page::Page;
pub use row::Row;
