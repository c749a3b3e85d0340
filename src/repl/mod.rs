//! REPL front end: line input and command preparation.
//!
//! The binary wires these together with a [`crate::table::Table`]; the
//! pieces live in the library so they can be unit tested without a
//! terminal.

pub mod command;
pub mod input;

pub use command::{MetaCommand, PrepareError, Statement};
pub use input::InputBuffer;
