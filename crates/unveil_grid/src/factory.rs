//! Reveal variant lookup
//!
//! Named construction for reveal orchestrators. Only the grid variant
//! exists today; the lookup is the extension point for other reveal
//! shapes.

use crate::options::RevealOptions;
use crate::reveal::GridReveal;

/// Instantiate the reveal variant registered under `kind`, or `None` for
/// an unknown name. Matching ignores ASCII case.
pub fn factory(kind: &str, options: RevealOptions) -> Option<GridReveal> {
    if kind.eq_ignore_ascii_case("grid") {
        Some(GridReveal::new(options))
    } else {
        None
    }
}
