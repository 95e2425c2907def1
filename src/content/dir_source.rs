//! Directory Content Source
//!
//! Discovers `content.md` / `content.txt` files under a real directory,
//! the way the site build globs its route tree. Each discovered file
//! becomes one (logical path, content) pair, keyed by its path relative
//! to the base directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use regex_lite::Regex;

use super::source::{ContentError, ContentSource};

lazy_static::lazy_static! {
    /// Relative paths that count as route content: `<route>/content.md|txt`.
    /// A content file directly at the base is not a route and is skipped.
    static ref ROUTE_RE: Regex = Regex::new(r"^(.+)/content\.(md|txt)$").unwrap();
}

/// Content source that reads route content from a directory tree.
pub struct DirSource {
    base: PathBuf,
}

impl DirSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Map a discovered file to its (route, extension), or `None` if it
    /// does not look like route content.
    fn route_for(&self, path: &Path) -> Option<(String, String)> {
        let relative = path.strip_prefix(&self.base).ok()?;
        let relative = relative.to_string_lossy();
        let caps = ROUTE_RE.captures(&relative)?;
        Some((caps[1].to_string(), caps[2].to_string()))
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn load(&self) -> Result<Vec<(String, String)>, ContentError> {
        let pattern = format!("{}/**/content.*", self.base.display());
        let paths = glob::glob(&pattern).map_err(|e| ContentError::Pattern(e.to_string()))?;

        let mut pairs = Vec::new();
        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(_) => continue,
            };
            let Some((route, ext)) = self.route_for(&path) else {
                continue;
            };
            let text = std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
                path: path.display().to_string(),
                source,
            })?;
            pairs.push((format!("/{}/content.{}", route, ext), text.trim().to_string()));
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_for_accepts_route_content() {
        let source = DirSource::new("/site/routes");
        assert_eq!(
            source.route_for(Path::new("/site/routes/about/content.md")),
            Some(("about".to_string(), "md".to_string()))
        );
        assert_eq!(
            source.route_for(Path::new("/site/routes/blog/my-post/content.txt")),
            Some(("blog/my-post".to_string(), "txt".to_string()))
        );
    }

    #[test]
    fn test_route_for_rejects_non_content() {
        let source = DirSource::new("/site/routes");
        // wrong name
        assert_eq!(source.route_for(Path::new("/site/routes/about/notes.md")), None);
        // wrong extension
        assert_eq!(
            source.route_for(Path::new("/site/routes/about/content.html")),
            None
        );
        // no route segment
        assert_eq!(source.route_for(Path::new("/site/routes/content.md")), None);
        // outside the base
        assert_eq!(source.route_for(Path::new("/elsewhere/about/content.md")), None);
    }
}
