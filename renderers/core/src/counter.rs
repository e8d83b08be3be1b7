//! List grouping and numbering state for one render pass.
//!
//! Blocks arrive flat, so list structure has to be reconstructed on the fly:
//! each list kind keeps a top-level count for the current run and one child
//! count per top-level ordinal for items nested below it.
//!
//! A run is closed by [`ListCounters::close_all`] (non-list content) or
//! [`ListCounters::close`] (an item of the other kind). Closing only zeroes the
//! top-level count; child counts are dropped the next time an item of that
//! kind arrives while the count is zero.
//!
//! Nesting is tracked one level deep. Depth 2 and below share the depth-1
//! bucket of the current parent.

use draft_model::ListKind;

/// Counter for one list kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListCounter {
    count: usize,
    child_counters: Vec<usize>,
}

impl ListCounter {
    /// Number of top-level items seen in the current run.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Running count of nested items, indexed by the parent's ordinal.
    #[must_use]
    pub fn child_counters(&self) -> &[usize] {
        &self.child_counters
    }

    /// Compute the displayed number of the next item at `depth`.
    pub fn next_number(&mut self, depth: u32) -> usize {
        let parent_index = self.count;
        if parent_index == 0 {
            self.child_counters.clear();
        }

        if depth >= 1 {
            if self.child_counters.len() <= parent_index {
                self.child_counters.resize(parent_index + 1, 0);
            }
            match self.child_counters.get_mut(parent_index) {
                Some(child) => {
                    *child += 1;
                    *child
                }
                None => 1,
            }
        } else {
            self.count += 1;
            self.count
        }
    }

    /// Count one more item without numbering it.
    pub fn advance(&mut self) {
        self.count += 1;
    }

    /// Zero the top-level count, returning whether a run was open.
    fn close(&mut self) -> bool {
        let was_open = self.count > 0;
        self.count = 0;
        was_open
    }
}

/// Both list counters for one render pass.
///
/// Create one per pass and drop it afterwards; instances must never be shared
/// between passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListCounters {
    unordered: ListCounter,
    ordered: ListCounter,
}

impl ListCounters {
    /// Fresh counters with no open run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The counter for `kind`.
    #[must_use]
    pub fn get(&self, kind: ListKind) -> &ListCounter {
        match kind {
            ListKind::Unordered => &self.unordered,
            ListKind::Ordered => &self.ordered,
        }
    }

    /// Mutable counter for `kind`.
    pub fn get_mut(&mut self, kind: ListKind) -> &mut ListCounter {
        match kind {
            ListKind::Unordered => &mut self.unordered,
            ListKind::Ordered => &mut self.ordered,
        }
    }

    /// Whether any list run is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.unordered.count > 0 || self.ordered.count > 0
    }

    /// Close the run of `kind`. Returns `true` if a separator is due.
    pub fn close(&mut self, kind: ListKind) -> bool {
        let was_open = self.get_mut(kind).close();
        if was_open {
            tracing::debug!(%kind, "list run closed by other list kind");
        }
        was_open
    }

    /// Close both runs. Returns `true` if a separator is due.
    pub fn close_all(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.unordered.close();
        self.ordered.close();
        tracing::debug!("list run closed by non-list block");
        true
    }
}
