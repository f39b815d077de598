use std::collections::BTreeMap;

/// Parsed `KEY=VALUE` pairs produced by a load.
///
/// Keys are unique; for duplicate keys the last line wins.
pub type Vault = BTreeMap<String, String>;

/// Sinks that receive parsed pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write pairs into the process environment only.
    ///
    /// The returned vault stays empty.
    Environment,
    /// Collect pairs into the returned vault only.
    #[default]
    Map,
    /// Collect pairs into the vault and write them into the process
    /// environment.
    Both,
}

impl OutputMode {
    pub fn writes_map(self) -> bool {
        matches!(self, Self::Map | Self::Both)
    }

    pub fn writes_environment(self) -> bool {
        matches!(self, Self::Environment | Self::Both)
    }
}
