use glam::Vec2;

use crate::types::*;

/// Public API contract for the collision context.
pub trait ContextApi {
    /// Construct a context with the given configuration. Fails with
    /// [`CollisionError::Allocation`] when the initial reserve cannot be met.
    fn new(cfg: ContextConfig) -> Result<Self, CollisionError>
    where
        Self: Sized;

    // --- Store lifecycle ---------------------------------------------------

    /// Register a fully built body and return its handle.
    fn register(&mut self, body: Body) -> Result<BodyId, CollisionError>;

    /// Build and register a body from an anchored position and dimensions.
    fn insert(
        &mut self,
        position: Vec2,
        dims: Vec2,
        anchor: Anchor,
        priority: i32,
        flags: BodyFlags,
        custom_flags: u32,
    ) -> Result<BodyId, CollisionError>;

    /// Drop every body without releasing storage. Outstanding handles become
    /// invalid and will alias future registrations.
    fn clear(&mut self);

    // --- Body lifecycle ----------------------------------------------------

    /// Move a body so its anchor sits at `position`, preserving dimensions.
    /// Trivially succeeds without moving a `DISABLED` body.
    fn place(&mut self, id: BodyId, position: Vec2) -> Result<(), CollisionError>;

    /// Shift a body by `delta`. Trivially succeeds without moving a
    /// `DISABLED` or static body.
    fn translate(&mut self, id: BodyId, delta: Vec2) -> Result<(), CollisionError>;

    // --- Queries -----------------------------------------------------------

    /// Anchor-point position of the body.
    fn position(&self, id: BodyId) -> Result<Vec2, CollisionError>;

    /// Width/height of the body.
    fn dims(&self, id: BodyId) -> Result<Vec2, CollisionError>;

    /// Current world-space bounds of the body.
    fn rect(&self, id: BodyId) -> Result<Rect, CollisionError>;

    /// Whether two bodies' rectangles overlap right now (flags ignored).
    fn overlaps(&self, id1: BodyId, id2: BodyId) -> Result<bool, CollisionError>;

    /// Center-to-center displacement from body 1 to body 2.
    fn vector_between(&self, id1: BodyId, id2: BodyId) -> Result<Vec2, CollisionError>;

    /// The body's collision results from the last resolve call.
    fn tick_data(&self, id: BodyId) -> Result<TickData, CollisionError>;

    // --- Per-flag tick predicates ------------------------------------------

    fn collided(&self, id: BodyId) -> Result<bool, CollisionError>;
    /// Either wall flag.
    fn collided_wall(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_ceiling(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_right_wall(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_floor(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_left_wall(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_up(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_right(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_down(&self, id: BodyId) -> Result<bool, CollisionError>;
    fn collided_left(&self, id: BodyId) -> Result<bool, CollisionError>;

    // --- Resolution --------------------------------------------------------

    /// The per-tick entry point: zero tick data, re-sort the sweep order,
    /// prune for candidate pairs, resolve every true overlap in place.
    fn resolve_collisions(&mut self);
}

/// Narrow-phase primitives: exact pair tests and priority-weighted resolution.
pub trait NarrowphaseApi {
    /// Per-axis penetration depths for a pair of rects; both components are
    /// non-negative iff the rects overlap.
    fn overlap_depths(a: &Rect, b: &Rect) -> Vec2;

    /// Resolve one confirmed-overlapping pair: push apart along the axis of
    /// least penetration, weighted by priority, and tag both tick records.
    /// Returns false when the pair was skipped (both bodies static).
    fn resolve_pair(
        a: &mut Body,
        a_tick: &mut TickData,
        b: &mut Body,
        b_tick: &mut TickData,
    ) -> bool;
}
