//! File System Module
//!
//! The synthetic, read-only site filesystem: node types, pure path
//! resolution, and the tree built once from site content.

pub mod path;
pub mod tree;
pub mod types;

pub use tree::VirtualFs;
pub use types::*;
