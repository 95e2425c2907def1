//! Virtual Filesystem Tree
//!
//! The in-memory site filesystem: built once from (logical path,
//! content) pairs, then queried read-only by the command handlers.
//! Intermediate directories are created on demand while building, so a
//! pair like `/blog/post/content.md` yields the whole `/blog/post`
//! chain.

use std::collections::BTreeMap;

use super::path;
use super::types::{mime_for_name, DirEntry, DirNode, FileNode, VfsError, VfsNode};

/// The virtual filesystem, rooted at `/`. The root node is always a
/// directory.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    root: VfsNode,
}

impl VirtualFs {
    /// Create an empty tree containing only the root directory.
    pub fn new() -> Self {
        Self {
            root: VfsNode::Directory(DirNode {
                name: String::new(),
                path: "/".to_string(),
                children: BTreeMap::new(),
            }),
        }
    }

    /// Build a tree from (logical path, text content) pairs. The final
    /// path segment becomes a file holding the content; a repeated path
    /// replaces the earlier node.
    pub fn from_pairs<I, P, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut fs = Self::new();
        for (path, content) in pairs {
            fs.insert_file(path.as_ref(), content.into());
        }
        fs
    }

    fn insert_file(&mut self, path: &str, content: String) {
        let parts = path::segments(path);
        if parts.is_empty() {
            // the root itself cannot become a file
            return;
        }
        if let VfsNode::Directory(root) = &mut self.root {
            insert_into(root, &parts, content);
        }
    }

    /// Look up a node by absolute path. `/` returns the root directory.
    pub fn node(&self, path: &str) -> Option<&VfsNode> {
        let mut current = &self.root;
        for part in path::segments(path) {
            match current {
                VfsNode::Directory(dir) => current = dir.children.get(part)?,
                VfsNode::File(_) => return None,
            }
        }
        Some(current)
    }

    /// Resolve `target` against `current` and validate that it names an
    /// existing directory. Errors quote the target as the user wrote it
    /// (after `~` stripping), matching the shell-style messages.
    pub fn navigate(&self, current: &str, target: &str) -> Result<String, VfsError> {
        let shown = path::strip_home(target);
        let resolved = path::resolve(current, target);
        match self.node(&resolved) {
            Some(node) if node.is_dir() => Ok(resolved),
            Some(_) => Err(VfsError::NotADirectory {
                path: shown.to_string(),
            }),
            None => Err(VfsError::NotFound {
                path: shown.to_string(),
            }),
        }
    }

    /// List the children of a directory, in lexicographic name order.
    pub fn list_dir(&self, path: &str) -> Result<Vec<DirEntry>, VfsError> {
        match self.node(path) {
            Some(VfsNode::Directory(dir)) => Ok(dir
                .children
                .values()
                .map(|child| DirEntry {
                    name: child.name().to_string(),
                    is_dir: child.is_dir(),
                })
                .collect()),
            Some(VfsNode::File(_)) => Err(VfsError::NotADirectory {
                path: path.to_string(),
            }),
            None => Err(VfsError::NotFound {
                path: path.to_string(),
            }),
        }
    }

    /// Read a file node by absolute path.
    pub fn read_file(&self, path: &str) -> Result<&FileNode, VfsError> {
        match self.node(path) {
            Some(VfsNode::File(file)) => Ok(file),
            Some(VfsNode::Directory(_)) => Err(VfsError::IsADirectory {
                path: path.to_string(),
            }),
            None => Err(VfsError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_into(dir: &mut DirNode, parts: &[&str], content: String) {
    let name = parts[0];
    let node_path = path::join(&dir.path, name);

    if parts.len() == 1 {
        dir.children.insert(
            name.to_string(),
            VfsNode::File(FileNode {
                name: name.to_string(),
                path: node_path,
                content,
                mime_type: mime_for_name(name),
            }),
        );
        return;
    }

    let child = dir
        .children
        .entry(name.to_string())
        .or_insert_with(|| empty_dir(name, node_path.clone()));
    if !child.is_dir() {
        // a later pair uses this file name as a directory; the directory wins
        *child = empty_dir(name, node_path);
    }
    if let VfsNode::Directory(sub) = child {
        insert_into(sub, &parts[1..], content);
    }
}

fn empty_dir(name: &str, path: String) -> VfsNode {
    VfsNode::Directory(DirNode {
        name: name.to_string(),
        path,
        children: BTreeMap::new(),
    })
}

// ============================================================================
// Tests
// ============================================================================
