//! Load `KEY=VALUE` pairs from a `.env` file.
//!
//! [`load`] is the safe default and returns a process-isolated [`Vault`].
//!
//! Writing into the process environment goes through [`load_with_mode`] or
//! [`VaultLoader::output_mode`], which are `unsafe` because callers must
//! guarantee no concurrent process-environment access. Those writes are not
//! transactional and cannot be rolled back.
//!
//! Parsing is deliberately lenient: per line, everything from the first `#`
//! is a comment, the rest is split at the first `=`, and key and value are
//! trimmed. Lines without `=` are skipped, never reported. There is no
//! quoting, escaping, interpolation, or multi-line value support.

mod env;
mod error;
mod fetch;
mod loader;
mod model;
mod parser;
mod path;

pub use error::Error;
pub use fetch::fetch_file;
pub use loader::{VaultLoader, load, load_with_mode};
pub use model::{OutputMode, Vault};
pub use parser::{
    normalize_line_endings, parse_bytes, parse_line, parse_reader, parse_str, split_lines,
};
pub use path::{DEFAULT_FILENAME, resolve_path};
