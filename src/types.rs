use bitflags::bitflags;
use glam::Vec2;

/// Priority value marking a body as static: never moved by the resolver and
/// never the losing side of a priority comparison.
pub const PRIORITY_STATIC: i32 = i32::MAX;

bitflags! {
    /// Persistent per-body capability flags.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct BodyFlags: u32 {
        /// Body is skipped by collision detection entirely.
        const NO_COLLISION = 0x0001;
        /// Body is skipped by detection, and `place`/`translate` become no-ops.
        const DISABLED     = 0x0002;
    }
}

bitflags! {
    /// Per-tick collision result flags.
    ///
    /// Direction flags (`UP`/`RIGHT`/`DOWN`/`LEFT`) record the direction the
    /// resolver pushed the body — or would have pushed it, for the partner
    /// that outranked the collision. The static-contact flags pair with the
    /// push direction: a body pushed `UP` off a static gets `FLOOR`, `DOWN`
    /// gets `CEILING`, `LEFT` gets `LEFT_WALL`, `RIGHT` gets `RIGHT_WALL`.
    /// Coordinates are screen-style: +x right, +y down.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct TickFlags: u32 {
        const COLLIDED   = 0x0001;
        const CEILING    = 0x0002;
        const RIGHT_WALL = 0x0004;
        const FLOOR      = 0x0008;
        const LEFT_WALL  = 0x0010;
        const UP         = 0x0020;
        const RIGHT      = 0x0040;
        const DOWN       = 0x0080;
        const LEFT       = 0x0100;
    }
}

/// Axis-aligned rectangle as min/max corners.
///
/// The engine relies on `min.x <= max.x` and `min.y <= max.y`; rects
/// hand-built with inverted corners give silently wrong sweep and overlap
/// results.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rect from its min corner and width/height.
    pub fn from_min_dims(min: Vec2, dims: Vec2) -> Self {
        Self { min, max: min + dims }
    }

    pub fn dims(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) / 2.0
    }

    /// Closed-interval overlap test: touching edges count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }
}

/// Handle to a registered body: its insertion index.
///
/// Stable for the body's lifetime. `Context::clear` resets the handle space;
/// ids retained across a clear silently alias newly registered bodies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u32);

impl BodyId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// The persistent simulation entity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Body {
    /// Current world-space bounds.
    pub rect: Rect,
    /// Vector from `rect.min` to the body's logical anchor point.
    pub offset: Vec2,
    /// Resolution rank; see [`PRIORITY_STATIC`].
    pub priority: i32,
    pub flags: BodyFlags,
    /// Caller-defined bitmask, OR-merged into colliding partners' tick data.
    pub custom_flags: u32,
}

impl Body {
    pub fn is_static(&self) -> bool {
        self.priority == PRIORITY_STATIC
    }
}

/// Transient per-body output of the last `resolve_collisions` call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickData {
    pub flags: TickFlags,
    /// Union of `custom_flags` received from every body collided with this tick.
    pub custom_flags: u32,
}

/// Axis the broad phase sorts and prunes along. Fixed at construction; a
/// tuning knob for scenes clustered along one axis, not a correctness choice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SweepAxis {
    #[default]
    X,
    Y,
}

/// Named reference point used to convert a placement position into a rect's
/// min corner. "Top" is the −y edge (screen coordinates).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anchor {
    Center,
    TopCenter,
    TopRight,
    CenterRight,
    BottomRight,
    BottomCenter,
    BottomLeft,
    CenterLeft,
    TopLeft,
}

impl Anchor {
    /// Vector from a rect's min corner to this anchor, for the given dims.
    pub fn offset(self, dims: Vec2) -> Vec2 {
        match self {
            Anchor::Center => Vec2::new(dims.x / 2.0, dims.y / 2.0),
            Anchor::TopCenter => Vec2::new(dims.x / 2.0, 0.0),
            Anchor::TopRight => Vec2::new(dims.x, 0.0),
            Anchor::CenterRight => Vec2::new(dims.x, dims.y / 2.0),
            Anchor::BottomRight => Vec2::new(dims.x, dims.y),
            Anchor::BottomCenter => Vec2::new(dims.x / 2.0, dims.y),
            Anchor::BottomLeft => Vec2::new(0.0, dims.y),
            Anchor::CenterLeft => Vec2::new(0.0, dims.y / 2.0),
            Anchor::TopLeft => Vec2::ZERO,
        }
    }
}

/// Constructor-only configuration for a [`Context`](crate::Context).
#[derive(Copy, Clone, Debug)]
pub struct ContextConfig {
    /// Capacity hint; storage doubles when exceeded.
    pub expected_bodies: usize,
    pub sweep_axis: SweepAxis,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            expected_bodies: 64,
            sweep_axis: SweepAxis::X,
        }
    }
}

/// Debug counters for the most recent `resolve_collisions` call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Pairs surviving the one-axis prune and flag filtering.
    pub candidate_pairs: usize,
    /// Candidates whose full rectangles actually overlapped.
    pub overlapping_pairs: usize,
    /// Overlapping pairs that produced flags/motion (excludes static/static).
    pub resolved_pairs: usize,
}

/// Errors surfaced by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollisionError {
    /// The supplied handle does not name a registered body.
    #[error("body handle {0:?} is out of range")]
    InvalidHandle(BodyId),
    /// Initial reserve or storage growth could not be satisfied. The store is
    /// left exactly as it was before the failing call.
    #[error("allocation failed while reserving body storage")]
    Allocation,
}
