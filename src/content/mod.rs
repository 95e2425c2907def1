//! Content Module
//!
//! The engine's single external collaborator: something that supplies
//! site text at initialization time.

pub mod dir_source;
pub mod source;

pub use dir_source::DirSource;
pub use source::{ContentError, ContentSource, StaticSource};
