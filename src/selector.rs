//! Click/hover driven range selection over slot indices.
//!
//! The selector never sees dates. It works on positions in the flattened
//! two-month sequence and reports what happened through [`SelectorEvent`];
//! mapping indices back to dates is the caller's job.

use tracing::{debug, trace};

/// Selection state over slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeSelector {
    /// No selection in progress.
    #[default]
    Idle,
    /// First click recorded; `cursor` follows the pointer until the second click.
    Anchored { anchor: usize, cursor: Option<usize> },
}

/// Outcome of a selector transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorEvent {
    /// The highlighted span changed while anchored.
    PreviewChanged { anchor: usize, cursor: Option<usize> },
    /// A second click closed a span; `lo < hi` always holds.
    Committed { lo: usize, hi: usize },
    /// A second click landed on the anchor itself. No range results.
    Collapsed { index: usize },
}

/// How a slot should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMark {
    #[default]
    None,
    /// The slot is the anchor or the cursor.
    Endpoint,
    /// The slot lies strictly between anchor and cursor.
    Interior,
}

impl SelectionMark {
    pub const fn is_selected(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl RangeSelector {
    pub const fn new() -> Self {
        Self::Idle
    }

    pub const fn is_anchored(&self) -> bool {
        matches!(self, Self::Anchored { .. })
    }

    pub const fn anchor(&self) -> Option<usize> {
        match *self {
            Self::Anchored { anchor, .. } => Some(anchor),
            Self::Idle => None,
        }
    }

    pub const fn cursor(&self) -> Option<usize> {
        match *self {
            Self::Anchored { cursor, .. } => cursor,
            Self::Idle => None,
        }
    }

    /// Handles a click on slot `index`.
    ///
    /// The first click anchors. The second click moves the cursor onto the
    /// clicked slot, orders the pair and returns to `Idle`.
    pub fn on_day_click(self, index: usize) -> (Self, Option<SelectorEvent>) {
        match self {
            Self::Idle => {
                debug!(anchor = index, "selection anchored");
                (
                    Self::Anchored {
                        anchor: index,
                        cursor: None,
                    },
                    Some(SelectorEvent::PreviewChanged {
                        anchor: index,
                        cursor: None,
                    }),
                )
            },
            Self::Anchored { anchor, .. } => {
                let (lo, hi) = if anchor <= index {
                    (anchor, index)
                } else {
                    (index, anchor)
                };
                let event = if lo == hi {
                    debug!(index, "second click on anchor; no range");
                    SelectorEvent::Collapsed { index }
                } else {
                    debug!(lo, hi, "selection committed");
                    SelectorEvent::Committed { lo, hi }
                };
                (Self::Idle, Some(event))
            },
        }
    }

    /// Handles the pointer entering slot `index`. Ignored unless anchored.
    pub fn on_day_hover(self, index: usize) -> (Self, Option<SelectorEvent>) {
        match self {
            Self::Idle => (self, None),
            Self::Anchored { anchor, .. } => {
                trace!(anchor, cursor = index, "selection preview");
                (
                    Self::Anchored {
                        anchor,
                        cursor: Some(index),
                    },
                    Some(SelectorEvent::PreviewChanged {
                        anchor,
                        cursor: Some(index),
                    }),
                )
            },
        }
    }

    /// Abandons any selection in progress.
    pub fn reset(self) -> Self {
        if self.is_anchored() {
            debug!("selection reset");
        }
        Self::Idle
    }

    /// Highlight of slot `index` under the current anchor and cursor.
    pub fn mark(&self, index: usize) -> SelectionMark {
        let Self::Anchored { anchor, cursor } = *self else {
            return SelectionMark::None;
        };
        if index == anchor || cursor == Some(index) {
            return SelectionMark::Endpoint;
        }
        match cursor {
            Some(cursor) if anchor.min(cursor) < index && index < anchor.max(cursor) => {
                SelectionMark::Interior
            },
            _ => SelectionMark::None,
        }
    }
}
