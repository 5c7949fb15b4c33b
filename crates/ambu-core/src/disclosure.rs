//! Per-source breakdown view state.
//!
//! Corroboration is literal string equality between a detail's phone and the
//! chosen number. Formatting differences ("02 123" vs "02123") count as
//! disagreement.

use crate::search::{SearchResult, SourceDetail};

/// One rendered line of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRow<'a> {
    pub detail: &'a SourceDetail,
    pub corroborating: bool,
}

/// Marks each detail, preserving order.
pub fn render<'a>(details: &'a [SourceDetail], phone_number: &str) -> Vec<DetailRow<'a>> {
    details
        .iter()
        .map(|detail| DetailRow {
            detail,
            corroborating: detail.phone == phone_number,
        })
        .collect()
}

/// Open/closed toggle for the breakdown. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailDisclosure {
    open: bool,
}

impl DetailDisclosure {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Rows to show for `result`, or `None` while closed or when the result
    /// has no breakdown.
    pub fn visible_rows<'a>(&self, result: &'a SearchResult) -> Option<Vec<DetailRow<'a>>> {
        if !self.open {
            return None;
        }
        match result {
            SearchResult::Found {
                phone_number,
                details,
                ..
            } => Some(render(details, phone_number)),
            _ => None,
        }
    }
}
