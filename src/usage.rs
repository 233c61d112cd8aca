use std::collections::HashMap;
use thiserror::Error;

/// Raised when the platform usage-stats query itself fails. "No data" is not
/// an error; sources return an empty map for that.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("usage stats unavailable: {0}")]
    Unavailable(String),
}

/// Per-app last-opened timestamps over a trailing window.
///
/// Only meaningful when the caller holds usage-access permission; the
/// assembler gates every lookup on that flag and re-checks it per call.
pub trait UsageSource {
    /// Returns `package_id -> last-opened epoch ms` for apps opened inside
    /// `[window_start_ms, window_end_ms]`. Apps with no recorded use are
    /// simply absent from the map.
    fn lookup(
        &self,
        window_start_ms: u64,
        window_end_ms: u64,
    ) -> Result<HashMap<String, u64>, UsageError>;
}

/// Fixed snapshot source. Ignores the window: platform sources scan events
/// inside it but may still report last-opened times that precede it, and a
/// snapshot has no event log to scan.
impl UsageSource for HashMap<String, u64> {
    fn lookup(
        &self,
        _window_start_ms: u64,
        _window_end_ms: u64,
    ) -> Result<HashMap<String, u64>, UsageError> {
        Ok(self.clone())
    }
}
