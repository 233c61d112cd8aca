//! List-assembly core of a minimalist launcher: joins the installed-app
//! inventory with usage stats and the pinned set, classifies stale apps, and
//! produces the deterministic drawer order.
//!
//! Platform collaborators (inventory, usage stats, pin persistence) enter as
//! injected traits so the pipeline stays testable off-device.

mod assembler;
mod inventory;
mod pins;
mod record;
mod usage;

pub use assembler::{assemble, assemble_at, filter_by_label};
pub use inventory::AppInventorySource;
pub use pins::{FilePinStore, PinStore, MAX_PINNED_APPS};
pub use record::{AppRecord, RawActivity, UNUSED_AFTER_MS};
pub use usage::{UsageError, UsageSource};
