//! Core library for the `list-dir-sizes` binary.
//!
//! The crate is split into small modules mirroring the stages of a listing
//! run: target resolution ([`dispatch`]), one-level enumeration and
//! rendering ([`lister`]), entry classification and display ordering
//! ([`entry`]), size aggregation and formatting ([`utils::size`]), and
//! colored output ([`output`]).
//!
//! Everything is synchronous and single-threaded: each filesystem query
//! blocks until the operating system responds, and no state is shared
//! across threads.

pub mod config;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod lister;
pub mod output;
pub mod utils;

pub use config::{ListOptions, TraversalMode};
pub use entry::{Entry, EntryKind};
pub use error::ListError;
