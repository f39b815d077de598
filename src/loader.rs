use std::path::{Path, PathBuf};

use crate::env::Sink;
use crate::error::Error;
use crate::fetch::fetch_file;
use crate::model::{OutputMode, Vault};
use crate::parser::{entries, normalize_line_endings, split_lines};
use crate::path::resolve_path;

/// Load `<prefix>.env` into a vault without touching the process environment.
///
/// `None` reads `.env` from the current working directory.
pub fn load(prefix: Option<&str>) -> Result<Vault, Error> {
    let mut loader = VaultLoader::new();
    if let Some(prefix) = prefix {
        loader = loader.prefix(prefix);
    }
    loader.load()
}

/// Load `<prefix>.env` into the sinks selected by `mode`.
///
/// With [`OutputMode::Environment`] the returned vault is empty.
///
/// # Safety
///
/// When `mode` writes the environment, the caller must ensure no other threads
/// concurrently read or write the process environment during this call.
pub unsafe fn load_with_mode(mode: OutputMode, prefix: Option<&str>) -> Result<Vault, Error> {
    let mut loader = VaultLoader::new();
    if let Some(prefix) = prefix {
        loader = loader.prefix(prefix);
    }
    // SAFETY: forwarded from this function's contract.
    unsafe { loader.output_mode(mode) }.load()
}

/// Builder-style dotenv loader.
#[derive(Debug, Clone, Default)]
pub struct VaultLoader {
    prefix: Option<String>,
    path: Option<PathBuf>,
    mode: OutputMode,
}

impl VaultLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix prepended verbatim to `.env`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Read exactly `path`, ignoring any prefix.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Select the sinks that receive parsed pairs.
    ///
    /// # Safety
    ///
    /// If `mode` writes the environment, the caller must ensure no other
    /// threads concurrently read or write the process environment while
    /// [`VaultLoader::load`] runs.
    pub unsafe fn output_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => resolve_path(self.prefix.as_deref()),
        }
    }

    /// Read the file and write every parsed pair into the selected sinks.
    ///
    /// Fails only when the file cannot be read, in which case nothing is
    /// written anywhere.
    pub fn load(&self) -> Result<Vault, Error> {
        let path = self.resolved_path();
        tracing::debug!(path = %path.display(), mode = ?self.mode, "loading dotenv file");

        let bytes = fetch_file(&path)?;
        let content = String::from_utf8_lossy(&bytes);
        let normalized = normalize_line_endings(&content);
        let lines = split_lines(&normalized);

        let mut vault = Vault::new();
        if self.mode.writes_map() {
            write_entries(&lines, Sink::map(&mut vault));
        }
        if self.mode.writes_environment() {
            // SAFETY: `mode` can only select the environment through
            // `output_mode`, whose caller guarantees exclusive access.
            write_entries(&lines, unsafe { Sink::process() });
        }

        Ok(vault)
    }
}

fn write_entries(lines: &[&str], mut sink: Sink<'_>) {
    let mut written = 0usize;
    for (key, value) in entries(lines) {
        if sink.write(key, value) {
            written += 1;
        }
    }
    tracing::debug!(sink = sink.name(), written, "applied dotenv entries");
}
