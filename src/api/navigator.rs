//! Slide deck navigation boundary.
//!
//! The chart pipeline has no dependency on this; it exists so the
//! presentation shell has explicit, owned navigation state instead of a
//! mutable global slide index.

use crate::error::{ChartError, ChartResult};

/// Result of one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Moved to the given slide index.
    Moved(usize),
    /// `prev()` on the first slide leaves the deck for the index page
    /// instead of wrapping.
    ExitToIndex,
    /// `next()` on the last slide is disabled.
    Blocked,
}

/// Ordered slide sequence, cyclic at neither end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideNavigator {
    current: usize,
    count: usize,
}

impl SlideNavigator {
    pub fn new(count: usize) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InvalidData(
                "slide deck must contain at least one slide".to_owned(),
            ));
        }
        Ok(Self { current: 0, count })
    }

    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    #[must_use]
    pub fn slide_count(self) -> usize {
        self.count
    }

    /// Whether `next()` would move (false on the last slide).
    #[must_use]
    pub fn can_advance(self) -> bool {
        self.current + 1 < self.count
    }

    pub fn next(&mut self) -> NavigationOutcome {
        if !self.can_advance() {
            return NavigationOutcome::Blocked;
        }
        self.current += 1;
        NavigationOutcome::Moved(self.current)
    }

    pub fn prev(&mut self) -> NavigationOutcome {
        if self.current == 0 {
            return NavigationOutcome::ExitToIndex;
        }
        self.current -= 1;
        NavigationOutcome::Moved(self.current)
    }
}
