//! Core types and merge computation for chat-merge
//!
//! This crate contains the domain types shared by the storage and CLI
//! crates. It performs no I/O.

mod constants;
mod index;
mod merge;

pub use constants::*;
pub use index::*;
pub use merge::*;
