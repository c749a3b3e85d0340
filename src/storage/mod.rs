//! Storage layer: on-disk format and the page store.
//!
//! [`page`] defines the raw page buffer and the fixed-width row codec;
//! [`pager`] maps page numbers to file offsets and keeps materialized
//! pages resident for the session.

pub mod page;
pub mod pager;

pub use pager::Pager;
