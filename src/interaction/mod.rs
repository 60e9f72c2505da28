//! Pointer-driven hover and tooltip handling.
//!
//! Every hoverable element follows one state machine:
//! rest -> (pointer-over) -> highlighted with tooltip -> (pointer-out) -> rest.
//! Tooltip visibility is a timed, cancelable fade: ~200 ms attack, ~500 ms
//! release. A pointer-over while a release fade is in flight cancels the fade
//! and re-shows from the current opacity. Content and position are recomputed
//! on every pointer-over, never cached.

use serde::{Deserialize, Serialize};

/// Attack duration of the tooltip fade, in seconds.
pub const TOOLTIP_ATTACK_SECONDS: f64 = 0.2;
/// Release duration of the tooltip fade, in seconds.
pub const TOOLTIP_RELEASE_SECONDS: f64 = 0.5;
/// Steady-state tooltip opacity while hovered.
pub const TOOLTIP_VISIBLE_OPACITY: f64 = 0.9;

/// Default tooltip offset from the pointer, in pixels.
const POINTER_OFFSET: (f64, f64) = (10.0, -28.0);

/// Marker opacity at rest and while highlighted.
pub const MARKER_REST_OPACITY: f64 = 0.5;
pub const MARKER_HIGHLIGHT_OPACITY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPhase {
    Rest,
    FadingIn,
    Visible,
    FadingOut,
}

/// Text lines shown in a tooltip, rebuilt on every pointer-over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub lines: Vec<String>,
}

impl TooltipContent {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// Tooltip fade state machine.
///
/// `step` advances the fade deterministically by wall-clock deltas, so hosts
/// drive it from whatever frame clock they have and tests drive it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    phase: TooltipPhase,
    opacity: f64,
    content: Option<TooltipContent>,
    x: f64,
    y: f64,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            phase: TooltipPhase::Rest,
            opacity: 0.0,
            content: None,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl TooltipState {
    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// Tooltip anchor position, offset from the last pointer position.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Starts (or restarts) the attack fade with fresh content and position.
    ///
    /// An in-flight release fade is canceled; opacity continues rising from
    /// wherever the release left it.
    pub fn on_pointer_over(&mut self, content: TooltipContent, pointer_x: f64, pointer_y: f64) {
        self.content = Some(content);
        self.x = pointer_x + POINTER_OFFSET.0;
        self.y = pointer_y + POINTER_OFFSET.1;
        if self.opacity >= TOOLTIP_VISIBLE_OPACITY {
            self.phase = TooltipPhase::Visible;
        } else {
            self.phase = TooltipPhase::FadingIn;
        }
    }

    /// Starts the release fade.
    pub fn on_pointer_out(&mut self) {
        if self.phase != TooltipPhase::Rest {
            self.phase = TooltipPhase::FadingOut;
        }
    }

    /// Advances the fade by `delta_seconds`.
    pub fn step(&mut self, delta_seconds: f64) {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        match self.phase {
            TooltipPhase::Rest | TooltipPhase::Visible => {}
            TooltipPhase::FadingIn => {
                let rate = TOOLTIP_VISIBLE_OPACITY / TOOLTIP_ATTACK_SECONDS;
                self.opacity += rate * delta_seconds;
                if self.opacity >= TOOLTIP_VISIBLE_OPACITY {
                    self.opacity = TOOLTIP_VISIBLE_OPACITY;
                    self.phase = TooltipPhase::Visible;
                }
            }
            TooltipPhase::FadingOut => {
                let rate = TOOLTIP_VISIBLE_OPACITY / TOOLTIP_RELEASE_SECONDS;
                self.opacity -= rate * delta_seconds;
                if self.opacity <= 0.0 {
                    self.opacity = 0.0;
                    self.phase = TooltipPhase::Rest;
                    self.content = None;
                }
            }
        }
    }
}

/// Pointer hit region of one hoverable element, in chart pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitShape {
    Circle { cx: f64, cy: f64, radius: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

impl HitShape {
    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        match self {
            Self::Circle { cx, cy, radius } => {
                let dx = px - cx;
                let dy = py - cy;
                dx * dx + dy * dy <= radius * radius
            }
            Self::Rect {
                x,
                y,
                width,
                height,
            } => px >= x && px <= x + width && py >= y && py <= y + height,
        }
    }
}

/// One hoverable element plus the chart-specific payload its tooltip is
/// computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget<P> {
    pub shape: HitShape,
    pub payload: P,
}

/// Couples a hit-test index with tooltip state and marker highlight.
///
/// Targets are rebound only through [`HoverController::rebuild`], in the same
/// pass that produced the geometry they describe, so a pointer event can never
/// resolve to a stale or removed element.
#[derive(Debug)]
pub struct HoverController<P> {
    targets: Vec<HoverTarget<P>>,
    tooltip: TooltipState,
    highlighted: Option<usize>,
}

impl<P> Default for HoverController<P> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            tooltip: TooltipState::default(),
            highlighted: None,
        }
    }
}

impl<P> HoverController<P> {
    /// Atomically replaces all hover targets and drops any highlight that
    /// referenced the previous geometry.
    pub fn rebuild(&mut self, targets: Vec<HoverTarget<P>>) {
        self.targets = targets;
        self.highlighted = None;
        self.tooltip.on_pointer_out();
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn targets(&self) -> &[HoverTarget<P>] {
        &self.targets
    }

    /// Index of the topmost target containing the pointer, if any.
    ///
    /// Later-registered targets win, matching paint order.
    #[must_use]
    pub fn hit_test(&self, px: f64, py: f64) -> Option<usize> {
        self.targets
            .iter()
            .rposition(|t| t.shape.contains(px, py))
    }

    /// Routes a pointer move, recomputing tooltip content through `format`
    /// when a target is hit.
    pub fn on_pointer_move<F>(&mut self, px: f64, py: f64, format: F)
    where
        F: Fn(&P) -> TooltipContent,
    {
        match self.hit_test(px, py) {
            Some(index) => {
                self.highlighted = Some(index);
                let content = format(&self.targets[index].payload);
                self.tooltip.on_pointer_over(content, px, py);
            }
            None => {
                self.highlighted = None;
                self.tooltip.on_pointer_out();
            }
        }
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Marker opacity for target `index` under the current highlight.
    #[must_use]
    pub fn marker_opacity(&self, index: usize) -> f64 {
        if self.highlighted == Some(index) {
            MARKER_HIGHLIGHT_OPACITY
        } else {
            MARKER_REST_OPACITY
        }
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Advances the tooltip fade.
    pub fn step(&mut self, delta_seconds: f64) {
        self.tooltip.step(delta_seconds);
    }
}
