//! bouplan turns a pasted text description of a directory layout — JSON,
//! `tree` output (Unix or Windows), indentation-based notation, or a flat
//! list of paths — into a canonical tree and materializes it on disk,
//! seeding new files with extension-appropriate placeholder content.

pub mod api;
pub mod content;
pub mod detect;
pub mod errors;
pub mod materialize;
pub mod parse;
pub mod preview;
pub mod prompt;
pub mod transactions;
pub mod tree;

pub use api::{generate, preview_structure, BouplanError};
pub use detect::{detect_input_format, InputFormat};
pub use parse::{parse, FormatError};
pub use tree::{Entry, EntryKind, Structure};
