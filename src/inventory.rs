use crate::record::RawActivity;

/// Enumerates every activity the platform considers launchable.
///
/// Implementations must exclude the launcher's own package. No ordering or
/// uniqueness guarantee: the same package may appear once per exported
/// activity, and the sequence order only matters as the de-duplication
/// tie-break during assembly.
pub trait AppInventorySource {
    fn list(&self) -> Vec<RawActivity>;
}

impl AppInventorySource for Vec<RawActivity> {
    fn list(&self) -> Vec<RawActivity> {
        self.clone()
    }
}
