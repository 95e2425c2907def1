//! Path Resolution
//!
//! Pure string-level path handling: resolving a target expression
//! against a current directory, parent/join helpers, and the display
//! form used in prompts. Existence checks live on `VirtualFs`; nothing
//! here touches the tree.

/// Split an absolute path into its non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Strip the leading `~` from `~/...` targets, leaving an absolute path.
/// A bare `~` or names like `~backup` are returned unchanged.
pub fn strip_home(target: &str) -> &str {
    match target.strip_prefix('~') {
        Some(rest) if rest.starts_with('/') => rest,
        _ => target,
    }
}

/// Resolve a target expression against the current directory.
///
/// Rules, in order:
/// - empty, `~` and `/` all mean the root;
/// - a leading `~/` is dropped, making the target absolute;
/// - absolute targets are taken segment for segment as written;
/// - relative targets are applied to the current path, `..` popping the
///   last segment (clamped at the root) and `.` skipped.
///
/// The result always starts with `/` and never ends with one (except
/// the root itself). Resolution does not check that the path exists.
pub fn resolve(current_path: &str, target: &str) -> String {
    if target.is_empty() || target == "~" || target == "/" {
        return "/".to_string();
    }

    let target = strip_home(target);

    let parts = if target.starts_with('/') {
        segments(target)
    } else {
        let mut parts = segments(current_path);
        for segment in segments(target) {
            match segment {
                ".." => {
                    parts.pop();
                }
                "." => {}
                name => parts.push(name),
            }
        }
        parts
    };

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Parent of an absolute path. The root is its own parent.
pub fn parent(path: &str) -> String {
    let parts = segments(path);
    if parts.len() <= 1 {
        return "/".to_string();
    }
    format!("/{}", parts[..parts.len() - 1].join("/"))
}

/// Join a child name onto a base directory path.
pub fn join(base: &str, name: &str) -> String {
    if base == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Display form of a path for prompts and history entries: the last
/// segment, or `~` at the root.
pub fn display_name(path: &str) -> &str {
    segments(path).last().copied().unwrap_or("~")
}

// ============================================================================
// Tests
// ============================================================================
