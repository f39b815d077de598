use crate::model::Vault;

/// Destination for parsed pairs.
#[derive(Debug)]
pub(crate) struct Sink<'a> {
    kind: SinkKind<'a>,
}

#[derive(Debug)]
enum SinkKind<'a> {
    /// Write through [`std::env::set_var`], which mutates global process
    /// state and is not thread-safe for concurrent environment access.
    Process,
    /// Insert into a caller-owned vault.
    Map(&'a mut Vault),
}

impl<'a> Sink<'a> {
    /// Create a process-environment sink.
    ///
    /// # Safety
    ///
    /// The caller must ensure no other threads concurrently read or write the
    /// process environment while this sink is written to.
    pub(crate) unsafe fn process() -> Self {
        Self {
            kind: SinkKind::Process,
        }
    }

    pub(crate) fn map(vault: &'a mut Vault) -> Self {
        Self {
            kind: SinkKind::Map(vault),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self.kind {
            SinkKind::Process => "environment",
            SinkKind::Map(_) => "map",
        }
    }

    /// Write one pair, overwriting any previous value for `key`.
    ///
    /// Returns `false` when the pair was not applied.
    pub(crate) fn write(&mut self, key: &str, value: &str) -> bool {
        match &mut self.kind {
            SinkKind::Process => {
                if !is_settable(key, value) {
                    tracing::warn!(key, "skipping pair the process environment cannot hold");
                    return false;
                }
                // SAFETY: `Process` is only built through `Sink::process`, whose
                // caller guarantees exclusive access to the environment.
                unsafe { std::env::set_var(key, value) };
                true
            }
            SinkKind::Map(vault) => {
                vault.insert(key.to_owned(), value.to_owned());
                true
            }
        }
    }
}

/// `set_var` panics on empty keys, keys containing `=` and NUL bytes.
fn is_settable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_sink_overwrites_duplicates() {
        let mut vault = Vault::new();
        let mut sink = Sink::map(&mut vault);

        assert!(sink.write("A", "1"));
        assert!(sink.write("A", "2"));
        assert_eq!(sink.name(), "map");
        assert_eq!(vault.len(), 1);
        assert_eq!(vault["A"], "2");
    }

    #[test]
    fn map_sink_accepts_empty_key() {
        let mut vault = Vault::new();
        assert!(Sink::map(&mut vault).write("", "value"));
        assert_eq!(vault[""], "value");
    }

    #[test]
    fn rejects_pairs_the_environment_cannot_hold() {
        assert!(is_settable("KEY", "value"));
        assert!(is_settable("KEY", ""));
        assert!(!is_settable("", "value"));
        assert!(!is_settable("A=B", "value"));
        assert!(!is_settable("A\0B", "value"));
        assert!(!is_settable("KEY", "va\0lue"));
    }

    #[test]
    fn process_sink_skips_empty_key() {
        // SAFETY: an empty key is rejected before the environment is touched.
        let mut sink = unsafe { Sink::process() };
        assert_eq!(sink.name(), "environment");
        assert!(!sink.write("", "value"));
    }
}
