/// An app not opened within this trailing window is classified unused.
/// The usage-lookup window and the staleness check share this constant.
pub const UNUSED_AFTER_MS: u64 = 30 * 24 * 60 * 60 * 1000;

/// One launchable activity as reported by the inventory source.
///
/// Multiple activities may carry the same `package_id`; de-duplication
/// happens during list assembly, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawActivity {
    pub label: String,
    pub package_id: String,
}

impl RawActivity {
    pub fn new<L: Into<String>, P: Into<String>>(label: L, package_id: P) -> Self {
        Self {
            label: label.into(),
            package_id: package_id.into(),
        }
    }
}

/// One installed application as shown in the drawer.
///
/// Recomputed on every assembly call; `package_id` is the only stable
/// identity across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRecord {
    /// Display name, platform-supplied, not guaranteed unique.
    pub label: String,
    /// Stable unique key within one assembled list.
    pub package_id: String,
    /// True iff the package is in the current pin set.
    pub is_pinned: bool,
    /// True iff usage access is held and the app was last opened more than
    /// [`UNUSED_AFTER_MS`] ago. Always false without usage access.
    pub is_unused: bool,
    /// Epoch milliseconds; 0 when never observed in the usage window.
    pub last_used_ms: u64,
}
