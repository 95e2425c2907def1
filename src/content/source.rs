//! Content Sources
//!
//! Where the site's text comes from. A content source enumerates
//! (logical path, content) pairs once at initialization time; after the
//! tree is built the engine never does I/O again.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while enumerating site content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content pattern: {0}")]
    Pattern(String),
}

/// Supplies the (logical path, text content) pairs the filesystem tree
/// is built from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn load(&self) -> Result<Vec<(String, String)>, ContentError>;
}

/// A content source over already-materialized pairs.
pub struct StaticSource {
    pairs: Vec<(String, String)>,
}

impl StaticSource {
    pub fn new<I, P, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(path, content)| (path.into(), content.into()))
                .collect(),
        }
    }

    /// The built-in demo site used when no content directory is given.
    pub fn sample_site() -> Self {
        Self::new([
            ("/about/content.md", ABOUT),
            ("/projects/content.md", PROJECTS),
            ("/blog/building-a-terminal-site/content.md", BLOG_POST),
            ("/contact/content.md", CONTACT),
        ])
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn load(&self) -> Result<Vec<(String, String)>, ContentError> {
        Ok(self.pairs.clone())
    }
}

const ABOUT: &str = "\
# About

Hi, I'm the person behind this site. I build things for the web,
mostly plumbing nobody sees, and I collect terminal emulators the
way other people collect plants.

Type `ls` to look around, `cd blog` to read something.";

const PROJECTS: &str = "\
# Projects

- termfolio    this terminal, a site pretending to be a shell
- driftwood    a static site generator that got out of hand
- pocketlog    structured logging for very small programs

Source for everything is on my forge of choice.";

const BLOG_POST: &str = "\
# Building a terminal site

Every portfolio needs a gimmick. Mine is that there is no navigation
bar, only a prompt.

The trick is that none of this is a real shell: the 'filesystem' is
a tree baked from the site's own content files, and every command is
a pure function from (arguments, current directory) to output text.
The page applies the side effects. That's the whole architecture.

If you're reading this with `cat`, it worked.";

const CONTACT: &str = "\
# Contact

mail:   hello@example.dev
code:   example.dev/git
social: @example in most places

No newsletters. Mail gets answered eventually.";

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_returns_pairs() {
        let source = StaticSource::new([("/a/content.md", "one"), ("/b/content.md", "two")]);
        let pairs = source.load().await.unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("/a/content.md".to_string(), "one".to_string()));
    }

    #[tokio::test]
    async fn test_sample_site_routes() {
        let pairs = StaticSource::sample_site().load().await.unwrap();
        let paths: Vec<&str> = pairs.iter().map(|(p, _)| p.as_str()).collect();
        assert!(paths.contains(&"/about/content.md"));
        assert!(paths.contains(&"/blog/building-a-terminal-site/content.md"));
        assert!(pairs.iter().all(|(_, content)| !content.is_empty()));
    }
}
