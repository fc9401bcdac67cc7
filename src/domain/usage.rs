//! Sibling listing shown when a set cannot route its arguments.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::unit::Unit;

/// Column layout of the sub-command listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UsageLayout {
    /// Name column never gets narrower than this
    pub min_width: usize,
    /// Widened columns are rounded up to a multiple of this
    pub column_step: usize,
}

impl Default for UsageLayout {
    fn default() -> Self {
        Self {
            min_width: 12,
            column_step: 4,
        }
    }
}

impl UsageLayout {
    /// Width of the name column for the given names.
    ///
    /// Each name needs one trailing space; whenever that does not fit, the
    /// width grows to the next multiple of `column_step`. It never shrinks.
    pub fn column_width<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> usize {
        let step = self.column_step.max(1);
        names.into_iter().fold(self.min_width, |width, name| {
            let needed = name.len() + 1;
            if needed > width {
                needed.div_ceil(step) * step
            } else {
                width
            }
        })
    }

    /// Full listing: reason header followed by one line per child, in order.
    pub fn render(&self, reason: &str, children: &[Unit]) -> String {
        let width = self.column_width(children.iter().map(Unit::name));
        let mut out = format!("{reason}.\n\nAvailable sub-commands are:\n");
        for child in children {
            // writing into a String cannot fail
            let _ = write!(out, "\n\t{:<width$}{}", child.name(), child.desc());
        }
        out
    }
}
