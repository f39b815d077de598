use std::path::PathBuf;

/// File name looked up by every load.
pub const DEFAULT_FILENAME: &str = ".env";

/// Build the dotenv path from an optional prefix.
///
/// The prefix is prepended verbatim, with no separator inserted: `"../"`
/// gives `../.env`, while `"config"` gives `config.env`. The result is not
/// validated; a bad path only surfaces when the file is opened.
pub fn resolve_path(prefix: Option<&str>) -> PathBuf {
    match prefix {
        Some(prefix) => PathBuf::from(format!("{prefix}{DEFAULT_FILENAME}")),
        None => PathBuf::from(DEFAULT_FILENAME),
    }
}
