//! Press highlight feedback
//!
//! Maps touch events on a peeked notification to color filter
//! operations, so the pressed surface lights up on finger-down and
//! returns to normal once the gesture ends or wanders off the view.
//! Pure decision logic: the caller owns the drawable and applies the
//! returned operation.

/// Touch event kinds relevant to highlight feedback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchAction {
    /// Finger down on the view
    Down,
    /// Finger lifted
    Up,
    /// Finger moved, with coordinates local to the view
    Move { x: f32, y: f32 },
    /// Touch landed outside the view bounds
    Outside,
    /// Gesture cancelled by the system
    Cancel,
    /// Any other action
    Other,
}

/// Axis-aligned rectangle in view-local pixel coordinates
///
/// `right` and `bottom` are exclusive. A rectangle with zero or
/// negative extent contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Whether the point lies inside the rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && x >= self.left
            && x < self.right
            && y >= self.top
            && y < self.bottom
    }
}

/// Lighting color filter: per channel `out = src * multiply / 255 + add`
///
/// Both factors are packed RGB values. Alpha passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingFilter {
    pub multiply: u32,
    pub add: u32,
}

impl LightingFilter {
    /// The highlight filter: one color as both factors
    ///
    /// Multiplying and adding the same color tints dark pixels toward
    /// it while already-bright pixels saturate, which reads as a press
    /// glow on typical notification backgrounds.
    pub fn lighten(color: u32) -> Self {
        Self {
            multiply: color,
            add: color,
        }
    }

    /// Apply the filter to one ARGB pixel
    pub fn apply(&self, argb: u32) -> u32 {
        let alpha = argb & 0xFF00_0000;
        let mut out = alpha;
        for shift in [16u32, 8, 0] {
            let src = (argb >> shift) & 0xFF;
            let mul = (self.multiply >> shift) & 0xFF;
            let add = (self.add >> shift) & 0xFF;
            let channel = (src * mul / 255 + add).min(255);
            out |= channel << shift;
        }
        out
    }
}

/// What the caller should do with the view's color filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Install this filter on the background drawable
    Set(LightingFilter),
    /// Remove any installed filter
    Clear,
    /// Leave the current filter as it is
    Keep,
}

/// Decides highlight filter operations for a pressable view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressHighlight {
    color: u32,
}

impl PressHighlight {
    pub fn new(color: u32) -> Self {
        Self { color }
    }

    /// Map one touch event to a filter operation
    ///
    /// `visible_rect` is the view's local visible rectangle at the time
    /// of the event. Coordinates are truncated to whole pixels before
    /// the containment check.
    pub fn on_touch(&self, action: TouchAction, visible_rect: Rect) -> FilterOp {
        match action {
            TouchAction::Down => FilterOp::Set(LightingFilter::lighten(self.color)),
            TouchAction::Up | TouchAction::Outside | TouchAction::Cancel => FilterOp::Clear,
            TouchAction::Move { x, y } => {
                if visible_rect.contains(x as i32, y as i32) {
                    FilterOp::Keep
                } else {
                    FilterOp::Clear
                }
            }
            TouchAction::Other => FilterOp::Keep,
        }
    }
}
