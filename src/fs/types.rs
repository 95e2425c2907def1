//! File System Types
//!
//! Node types for the virtual site filesystem. The tree is built once
//! from site content and never mutated afterwards, so nodes carry plain
//! owned data and no locking.

use std::collections::BTreeMap;
use thiserror::Error;

/// File system errors
///
/// Display strings are lowercase shell phrases so command handlers can
/// prefix them verbatim, e.g. `cd: no such file or directory: blog`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("no such file or directory: {path}")]
    NotFound { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    #[error("is a directory: {path}")]
    IsADirectory { path: String },
}

/// A directory node with name-keyed children.
///
/// Children live in a `BTreeMap` so listings come out in lexicographic
/// order without sorting at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    pub name: String,
    pub path: String,
    pub children: BTreeMap<String, VfsNode>,
}

/// A file node holding the text shown by `cat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    pub content: String,
    pub mime_type: Option<String>,
}

/// A node in the virtual filesystem tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    Directory(DirNode),
    File(FileNode),
}

impl VfsNode {
    /// Check if the node is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory(_))
    }

    /// Check if the node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, VfsNode::File(_))
    }

    /// Get the node's own name (last path segment)
    pub fn name(&self) -> &str {
        match self {
            VfsNode::Directory(dir) => &dir.name,
            VfsNode::File(file) => &file.name,
        }
    }

    /// Get the node's absolute path
    pub fn path(&self) -> &str {
        match self {
            VfsNode::Directory(dir) => &dir.path,
            VfsNode::File(file) => &file.path,
        }
    }
}

/// Directory listing record (similar to a dirent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Infer a MIME tag from a file name extension. Extensionless names get
/// no tag.
pub fn mime_for_name(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let mime = match ext {
        "md" => "text/markdown",
        "html" => "text/html",
        _ => "text/plain",
    };
    Some(mime.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let file = VfsNode::File(FileNode {
            name: "content.md".to_string(),
            path: "/about/content.md".to_string(),
            content: "hello".to_string(),
            mime_type: Some("text/markdown".to_string()),
        });
        assert!(file.is_file());
        assert!(!file.is_dir());
        assert_eq!(file.name(), "content.md");
        assert_eq!(file.path(), "/about/content.md");

        let dir = VfsNode::Directory(DirNode {
            name: "about".to_string(),
            path: "/about".to_string(),
            children: BTreeMap::new(),
        });
        assert!(dir.is_dir());
        assert!(!dir.is_file());
        assert_eq!(dir.name(), "about");
        assert_eq!(dir.path(), "/about");
    }

    #[test]
    fn test_error_display_is_shell_phrased() {
        let err = VfsError::NotFound {
            path: "blog".to_string(),
        };
        assert_eq!(err.to_string(), "no such file or directory: blog");

        let err = VfsError::NotADirectory {
            path: "content.md".to_string(),
        };
        assert_eq!(err.to_string(), "not a directory: content.md");

        let err = VfsError::IsADirectory {
            path: "/about".to_string(),
        };
        assert_eq!(err.to_string(), "is a directory: /about");
    }

    #[test]
    fn test_mime_for_name() {
        assert_eq!(mime_for_name("content.md").as_deref(), Some("text/markdown"));
        assert_eq!(mime_for_name("index.html").as_deref(), Some("text/html"));
        assert_eq!(mime_for_name("notes.txt").as_deref(), Some("text/plain"));
        assert_eq!(mime_for_name("data.csv").as_deref(), Some("text/plain"));
        assert_eq!(mime_for_name("README"), None);
    }
}
