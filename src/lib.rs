//! termfolio - a portfolio site pretending to be a shell
//!
//! This library provides the command dispatch and virtual filesystem
//! engine behind a terminal-styled portfolio page: a read-only tree
//! built from site content, a small command set (`ls`, `cd`, `cat`,
//! `help`, `neofetch`, `rm`, `clear`) with `&&` chaining, and session
//! state driven entirely by declarative side effects.

pub mod commands;
pub mod content;
pub mod fs;
pub mod session;
pub mod terminal;

pub use commands::{CommandRegistry, CommandResult, ErrorCode, SideEffect};
pub use content::{ContentError, ContentSource, DirSource, StaticSource};
pub use fs::{VfsError, VfsNode, VirtualFs};
pub use session::{EntryKind, HistoryEntry, SessionState};
pub use terminal::{ExecOutcome, Terminal, TerminalConfig};
