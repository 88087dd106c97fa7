//! Process-level match run id.
//!
//! Every ranking produced by one process carries the same ULID so a
//! presentation layer can group the responses it received from a single
//! engine instance. ULIDs sort by creation time.

use once_cell::sync::Lazy;
use ulid::Ulid;

static MATCH_RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Run id for this process, generated on first access (26 chars).
#[inline]
pub fn get() -> &'static str {
    &MATCH_RUN_ID
}
