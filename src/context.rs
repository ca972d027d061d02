use std::cmp::Ordering;

use glam::Vec2;

use crate::api::{ContextApi, NarrowphaseApi};
use crate::narrowphase::Narrowphase;
use crate::types::*;

/// The body store plus everything one resolve tick needs: the sweep
/// permutation and the per-tick collision results, grown in lockstep with the
/// bodies and indexed by the same handle.
pub struct Context {
    bodies: Vec<Body>,
    /// Permutation of `0..bodies.len()`, kept sorted by the broad phase.
    order: Vec<u32>,
    tick_data: Vec<TickData>,
    sweep_axis: SweepAxis,
    stats: SweepStats,
}

fn axis_min(rect: &Rect, axis: SweepAxis) -> f32 {
    match axis {
        SweepAxis::X => rect.min.x,
        SweepAxis::Y => rect.min.y,
    }
}

fn axis_max(rect: &Rect, axis: SweepAxis) -> f32 {
    match axis {
        SweepAxis::X => rect.max.x,
        SweepAxis::Y => rect.max.y,
    }
}

/// Disjoint mutable references into one slice; `i != j` is the caller's
/// invariant.
fn pair_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = slice.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = slice.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

fn reserve<T>(v: &mut Vec<T>, additional: usize) -> Result<(), CollisionError> {
    v.try_reserve_exact(additional)
        .map_err(|_| CollisionError::Allocation)
}

impl ContextApi for Context {
    fn new(cfg: ContextConfig) -> Result<Self, CollisionError> {
        let mut ctx = Self {
            bodies: Vec::new(),
            order: Vec::new(),
            tick_data: Vec::new(),
            sweep_axis: cfg.sweep_axis,
            stats: SweepStats::default(),
        };
        reserve(&mut ctx.bodies, cfg.expected_bodies)?;
        reserve(&mut ctx.order, cfg.expected_bodies)?;
        reserve(&mut ctx.tick_data, cfg.expected_bodies)?;
        Ok(ctx)
    }

    fn register(&mut self, body: Body) -> Result<BodyId, CollisionError> {
        self.ensure_slot()?;

        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        self.order.push(id.0);
        self.tick_data.push(TickData::default());
        Ok(id)
    }

    fn insert(
        &mut self,
        position: Vec2,
        dims: Vec2,
        anchor: Anchor,
        priority: i32,
        flags: BodyFlags,
        custom_flags: u32,
    ) -> Result<BodyId, CollisionError> {
        let offset = anchor.offset(dims);
        self.register(Body {
            rect: Rect::from_min_dims(position - offset, dims),
            offset,
            priority,
            flags,
            custom_flags,
        })
    }

    fn clear(&mut self) {
        self.bodies.clear();
        self.order.clear();
        self.tick_data.clear();
        self.stats = SweepStats::default();
        log::debug!("context cleared, capacity {} retained", self.bodies.capacity());
    }

    fn place(&mut self, id: BodyId, position: Vec2) -> Result<(), CollisionError> {
        let idx = self.check(id)?;
        let body = &mut self.bodies[idx];
        if body.flags.contains(BodyFlags::DISABLED) {
            return Ok(());
        }
        let dims = body.rect.dims();
        body.rect = Rect::from_min_dims(position - body.offset, dims);
        Ok(())
    }

    fn translate(&mut self, id: BodyId, delta: Vec2) -> Result<(), CollisionError> {
        let idx = self.check(id)?;
        let body = &mut self.bodies[idx];
        if body.flags.contains(BodyFlags::DISABLED) || body.is_static() {
            return Ok(());
        }
        body.rect.translate(delta);
        Ok(())
    }

    fn position(&self, id: BodyId) -> Result<Vec2, CollisionError> {
        let idx = self.check(id)?;
        let body = &self.bodies[idx];
        Ok(body.rect.min + body.offset)
    }

    fn dims(&self, id: BodyId) -> Result<Vec2, CollisionError> {
        Ok(self.bodies[self.check(id)?].rect.dims())
    }

    fn rect(&self, id: BodyId) -> Result<Rect, CollisionError> {
        Ok(self.bodies[self.check(id)?].rect)
    }

    fn overlaps(&self, id1: BodyId, id2: BodyId) -> Result<bool, CollisionError> {
        let (i, j) = (self.check(id1)?, self.check(id2)?);
        Ok(self.bodies[i].rect.overlaps(&self.bodies[j].rect))
    }

    fn vector_between(&self, id1: BodyId, id2: BodyId) -> Result<Vec2, CollisionError> {
        let (i, j) = (self.check(id1)?, self.check(id2)?);
        Ok(self.bodies[j].rect.center() - self.bodies[i].rect.center())
    }

    fn tick_data(&self, id: BodyId) -> Result<TickData, CollisionError> {
        Ok(self.tick_data[self.check(id)?])
    }

    fn collided(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::COLLIDED)
    }

    fn collided_wall(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::LEFT_WALL | TickFlags::RIGHT_WALL)
    }

    fn collided_ceiling(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::CEILING)
    }

    fn collided_right_wall(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::RIGHT_WALL)
    }

    fn collided_floor(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::FLOOR)
    }

    fn collided_left_wall(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::LEFT_WALL)
    }

    fn collided_up(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::UP)
    }

    fn collided_right(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::RIGHT)
    }

    fn collided_down(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::DOWN)
    }

    fn collided_left(&self, id: BodyId) -> Result<bool, CollisionError> {
        self.tick_flag(id, TickFlags::LEFT)
    }

    fn resolve_collisions(&mut self) {
        self.tick_data.fill(TickData::default());
        self.sort_sweep_order();

        let mut stats = SweepStats::default();
        let axis = self.sweep_axis;
        let skip = BodyFlags::DISABLED | BodyFlags::NO_COLLISION;
        let n = self.bodies.len();

        for i in 0..n {
            let bi = self.order[i] as usize;
            if self.bodies[bi].flags.intersects(skip) {
                continue;
            }
            for j in (i + 1)..n {
                let bj = self.order[j] as usize;
                // Re-read body i's max each step: earlier resolutions in this
                // scan may already have moved it.
                if axis_min(&self.bodies[bj].rect, axis) > axis_max(&self.bodies[bi].rect, axis) {
                    break;
                }
                if self.bodies[bj].flags.intersects(skip) {
                    continue;
                }
                stats.candidate_pairs += 1;
                if self.bodies[bi].rect.overlaps(&self.bodies[bj].rect) {
                    stats.overlapping_pairs += 1;
                    let (a, b) = pair_mut(&mut self.bodies, bi, bj);
                    let (a_tick, b_tick) = pair_mut(&mut self.tick_data, bi, bj);
                    if Narrowphase::resolve_pair(a, a_tick, b, b_tick) {
                        stats.resolved_pairs += 1;
                    }
                }
            }
        }

        self.stats = stats;
        log::trace!(
            "resolve: {} bodies, {} candidates, {} overlapping, {} resolved",
            n,
            stats.candidate_pairs,
            stats.overlapping_pairs,
            stats.resolved_pairs
        );
    }
}

impl Context {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Registered-body capacity before the next growth.
    pub fn capacity(&self) -> usize {
        self.bodies.capacity()
    }

    pub fn sweep_axis(&self) -> SweepAxis {
        self.sweep_axis
    }

    /// Counters from the most recent `resolve_collisions` call.
    pub fn stats(&self) -> SweepStats {
        self.stats
    }

    fn check(&self, id: BodyId) -> Result<usize, CollisionError> {
        if id.index() < self.bodies.len() {
            Ok(id.index())
        } else {
            Err(CollisionError::InvalidHandle(id))
        }
    }

    fn tick_flag(&self, id: BodyId, flags: TickFlags) -> Result<bool, CollisionError> {
        Ok(self.tick_data[self.check(id)?].flags.intersects(flags))
    }

    /// Guarantee room for one more body in all three arrays, doubling on
    /// demand. Any failure leaves lengths and contents untouched.
    fn ensure_slot(&mut self) -> Result<(), CollisionError> {
        if self.bodies.len() == self.bodies.capacity() {
            let additional = self.bodies.len().max(1);
            reserve(&mut self.bodies, additional)?;
            log::debug!("grew body storage to capacity {}", self.bodies.capacity());
        }
        if self.order.len() == self.order.capacity() {
            let additional = self.order.len().max(1);
            reserve(&mut self.order, additional)?;
        }
        if self.tick_data.len() == self.tick_data.capacity() {
            let additional = self.tick_data.len().max(1);
            reserve(&mut self.tick_data, additional)?;
        }
        Ok(())
    }

    /// Stable sort of the permutation by ascending min edge on the sweep
    /// axis. Stability keeps resolution order deterministic among equal
    /// coordinates, and the adaptive sort is near O(n) on the almost-sorted
    /// orders successive ticks produce.
    fn sort_sweep_order(&mut self) {
        let bodies = &self.bodies;
        match self.sweep_axis {
            SweepAxis::X => self.order.sort_by(|&p, &q| {
                bodies[p as usize]
                    .rect
                    .min
                    .x
                    .partial_cmp(&bodies[q as usize].rect.min.x)
                    .unwrap_or(Ordering::Equal)
            }),
            SweepAxis::Y => self.order.sort_by(|&p, &q| {
                bodies[p as usize]
                    .rect
                    .min
                    .y
                    .partial_cmp(&bodies[q as usize].rect.min.y)
                    .unwrap_or(Ordering::Equal)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ANCHORS: [Anchor; 9] = [
        Anchor::Center,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterRight,
        Anchor::BottomRight,
        Anchor::BottomCenter,
        Anchor::BottomLeft,
        Anchor::CenterLeft,
        Anchor::TopLeft,
    ];

    fn ctx(axis: SweepAxis) -> Context {
        Context::new(ContextConfig {
            expected_bodies: 8,
            sweep_axis: axis,
        })
        .unwrap()
    }

    fn insert_box(
        ctx: &mut Context,
        min: Vec2,
        dims: Vec2,
        priority: i32,
        flags: BodyFlags,
    ) -> BodyId {
        ctx.insert(min, dims, Anchor::TopLeft, priority, flags, 0)
            .unwrap()
    }

    #[test]
    fn test_place_round_trips_every_anchor() {
        let mut c = ctx(SweepAxis::X);
        let dims = Vec2::new(3.0, 7.0);
        for (i, anchor) in ALL_ANCHORS.iter().enumerate() {
            let id = c
                .insert(Vec2::new(i as f32, -2.0), dims, *anchor, 0, BodyFlags::empty(), 0)
                .unwrap();
            let p = Vec2::new(10.5 + i as f32, -4.25);
            c.place(id, p).unwrap();
            assert_eq!(c.position(id).unwrap(), p);
            assert_eq!(c.dims(id).unwrap(), dims);
        }
    }

    #[test]
    fn test_insert_anchored_rect_derivation() {
        let mut c = ctx(SweepAxis::X);
        let id = c
            .insert(
                Vec2::new(10.0, 10.0),
                Vec2::new(4.0, 2.0),
                Anchor::Center,
                0,
                BodyFlags::empty(),
                0,
            )
            .unwrap();
        let r = c.rect(id).unwrap();
        assert_eq!(r.min, Vec2::new(8.0, 9.0));
        assert_eq!(r.max, Vec2::new(12.0, 11.0));
    }

    #[test]
    fn test_invalid_handle_everywhere() {
        let mut c = ctx(SweepAxis::X);
        let id = insert_box(&mut c, Vec2::ZERO, Vec2::ONE, 0, BodyFlags::empty());
        let bad = BodyId(7);
        assert_eq!(c.place(bad, Vec2::ZERO), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.translate(bad, Vec2::ZERO), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.position(bad), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.dims(bad), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.rect(bad), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.overlaps(id, bad), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.vector_between(bad, id), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.tick_data(bad), Err(CollisionError::InvalidHandle(bad)));
        assert_eq!(c.collided(bad), Err(CollisionError::InvalidHandle(bad)));
    }

    #[test]
    fn test_worked_example_static_pushout() {
        // A at (0,0) 10×10 dynamic; B at (5,0) 10×10 static. A must end up
        // translated exactly (−5, 0) with LEFT + LEFT_WALL; B untouched.
        let mut c = ctx(SweepAxis::X);
        let a = insert_box(&mut c, Vec2::ZERO, Vec2::splat(10.0), 0, BodyFlags::empty());
        let b = insert_box(
            &mut c,
            Vec2::new(5.0, 0.0),
            Vec2::splat(10.0),
            PRIORITY_STATIC,
            BodyFlags::empty(),
        );
        c.resolve_collisions();
        assert_eq!(c.rect(a).unwrap().min, Vec2::new(-5.0, 0.0));
        assert_eq!(c.rect(b).unwrap().min, Vec2::new(5.0, 0.0));
        assert!(c.collided(a).unwrap());
        assert!(c.collided_left(a).unwrap());
        assert!(c.collided_left_wall(a).unwrap());
        assert!(c.collided_wall(a).unwrap());
        assert!(!c.collided_right_wall(a).unwrap());
        assert!(c.collided_right(b).unwrap());
        assert!(!c.collided_wall(b).unwrap());
        assert_eq!(c.rect(a).unwrap().max.x, 5.0);
    }

    #[test]
    fn test_non_overlapping_pairs_untouched() {
        let mut c = ctx(SweepAxis::X);
        let a = insert_box(&mut c, Vec2::ZERO, Vec2::ONE, 0, BodyFlags::empty());
        let b = insert_box(&mut c, Vec2::new(5.0, 0.0), Vec2::ONE, 0, BodyFlags::empty());
        let before = (c.rect(a).unwrap(), c.rect(b).unwrap());
        c.resolve_collisions();
        assert_eq!((c.rect(a).unwrap(), c.rect(b).unwrap()), before);
        assert!(!c.collided(a).unwrap());
        assert!(!c.collided(b).unwrap());
        assert_eq!(c.tick_data(a).unwrap().custom_flags, 0);
    }

    #[test]
    fn test_overlapping_statics_unchanged() {
        let mut c = ctx(SweepAxis::X);
        let a = insert_box(&mut c, Vec2::ZERO, Vec2::splat(4.0), PRIORITY_STATIC, BodyFlags::empty());
        let b = insert_box(
            &mut c,
            Vec2::new(1.0, 1.0),
            Vec2::splat(4.0),
            PRIORITY_STATIC,
            BodyFlags::empty(),
        );
        c.resolve_collisions();
        assert_eq!(c.rect(a).unwrap().min, Vec2::ZERO);
        assert_eq!(c.rect(b).unwrap().min, Vec2::new(1.0, 1.0));
        assert!(!c.collided(a).unwrap());
        assert!(!c.collided(b).unwrap());
        assert_eq!(c.stats().resolved_pairs, 0);
        assert_eq!(c.stats().overlapping_pairs, 1);
    }

    #[test]
    fn test_equal_priority_halved_separation() {
        let mut c = ctx(SweepAxis::X);
        let a = insert_box(&mut c, Vec2::ZERO, Vec2::splat(4.0), 1, BodyFlags::empty());
        let b = insert_box(&mut c, Vec2::new(3.0, 0.5), Vec2::splat(4.0), 1, BodyFlags::empty());
        c.resolve_collisions();
        // 1 deep on x: each moved 0.5 apart, overlap on x reduced to ~0.
        assert_eq!(c.rect(a).unwrap().min.x, -0.5);
        assert_eq!(c.rect(b).unwrap().min.x, 3.5);
        let gap = c.rect(b).unwrap().min.x - c.rect(a).unwrap().max.x;
        assert!(gap.abs() < 1e-5);
    }

    #[test]
    fn test_custom_flags_only_on_contact() {
        let mut c = ctx(SweepAxis::X);
        let a = c
            .insert(Vec2::ZERO, Vec2::splat(4.0), Anchor::TopLeft, 0, BodyFlags::empty(), 0b01)
            .unwrap();
        let b = c
            .insert(Vec2::new(2.0, 0.0), Vec2::splat(4.0), Anchor::TopLeft, 0, BodyFlags::empty(), 0b10)
            .unwrap();
        let far = c
            .insert(Vec2::new(50.0, 0.0), Vec2::splat(4.0), Anchor::TopLeft, 0, BodyFlags::empty(), 0b100)
            .unwrap();
        c.resolve_collisions();
        assert_eq!(c.tick_data(a).unwrap().custom_flags, 0b10);
        assert_eq!(c.tick_data(b).unwrap().custom_flags, 0b01);
        assert_eq!(c.tick_data(far).unwrap().custom_flags, 0);
    }

    #[test]
    fn test_disabled_bodies_frozen_and_ignored() {
        let mut c = ctx(SweepAxis::X);
        let solid = insert_box(&mut c, Vec2::ZERO, Vec2::splat(4.0), 0, BodyFlags::empty());
        let ghost = insert_box(&mut c, Vec2::new(1.0, 1.0), Vec2::splat(4.0), 0, BodyFlags::DISABLED);
        assert!(c.place(ghost, Vec2::new(100.0, 0.0)).is_ok());
        assert!(c.translate(ghost, Vec2::new(5.0, 5.0)).is_ok());
        assert_eq!(c.rect(ghost).unwrap().min, Vec2::new(1.0, 1.0));
        c.resolve_collisions();
        assert!(!c.collided(solid).unwrap());
        assert!(!c.collided(ghost).unwrap());
        assert_eq!(c.rect(solid).unwrap().min, Vec2::ZERO);
    }

    #[test]
    fn test_static_ignores_translate_but_not_place() {
        let mut c = ctx(SweepAxis::X);
        let id = insert_box(&mut c, Vec2::ZERO, Vec2::splat(2.0), PRIORITY_STATIC, BodyFlags::empty());
        c.translate(id, Vec2::new(3.0, 3.0)).unwrap();
        assert_eq!(c.rect(id).unwrap().min, Vec2::ZERO);
        c.place(id, Vec2::new(9.0, 9.0)).unwrap();
        assert_eq!(c.rect(id).unwrap().min, Vec2::new(9.0, 9.0));
    }

    #[test]
    fn no_collision_excluded_on_both_sweep_axes() {
        // Exclusion must behave identically whichever axis the broad phase
        // sweeps on, for both sides of a candidate pair.
        for axis in [SweepAxis::X, SweepAxis::Y] {
            let mut c = ctx(axis);
            let ghost = insert_box(&mut c, Vec2::ZERO, Vec2::splat(4.0), 0, BodyFlags::NO_COLLISION);
            let solid_a = insert_box(&mut c, Vec2::new(1.0, 1.0), Vec2::splat(4.0), 0, BodyFlags::empty());
            let solid_b = insert_box(&mut c, Vec2::new(2.0, 2.0), Vec2::splat(4.0), 0, BodyFlags::empty());
            c.resolve_collisions();
            assert!(!c.collided(ghost).unwrap(), "axis {axis:?}");
            assert_eq!(c.rect(ghost).unwrap().min, Vec2::ZERO);
            // The two solid bodies still resolve against each other.
            assert!(c.collided(solid_a).unwrap(), "axis {axis:?}");
            assert!(c.collided(solid_b).unwrap(), "axis {axis:?}");
        }
    }

    #[test]
    fn test_growth_preserves_bodies_and_ids() {
        let mut c = Context::new(ContextConfig {
            expected_bodies: 2,
            sweep_axis: SweepAxis::X,
        })
        .unwrap();
        let mut ids = Vec::new();
        for i in 0..33 {
            let min = Vec2::new(i as f32 * 10.0, -(i as f32));
            ids.push(insert_box(&mut c, min, Vec2::new(1.0 + i as f32, 2.0), i, BodyFlags::empty()));
        }
        assert!(c.capacity() >= 33);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.0 as usize, i);
            let r = c.rect(*id).unwrap();
            assert_eq!(r.min, Vec2::new(i as f32 * 10.0, -(i as f32)));
            assert_eq!(c.dims(*id).unwrap(), Vec2::new(1.0 + i as f32, 2.0));
        }
    }

    #[test]
    fn test_clear_resets_handle_space() {
        let mut c = ctx(SweepAxis::X);
        let id = insert_box(&mut c, Vec2::ZERO, Vec2::ONE, 0, BodyFlags::empty());
        let cap = c.capacity();
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.capacity(), cap);
        assert_eq!(c.rect(id), Err(CollisionError::InvalidHandle(id)));
        let id2 = insert_box(&mut c, Vec2::splat(5.0), Vec2::ONE, 0, BodyFlags::empty());
        assert_eq!(id2, BodyId(0));
    }

    #[test]
    fn test_vector_between_centers() {
        let mut c = ctx(SweepAxis::X);
        let a = insert_box(&mut c, Vec2::ZERO, Vec2::splat(2.0), 0, BodyFlags::empty());
        let b = insert_box(&mut c, Vec2::new(10.0, 4.0), Vec2::splat(2.0), 0, BodyFlags::empty());
        assert_eq!(c.vector_between(a, b).unwrap(), Vec2::new(10.0, 4.0));
        assert_eq!(c.vector_between(b, a).unwrap(), Vec2::new(-10.0, -4.0));
    }

    #[test]
    fn test_tick_data_overwritten_each_resolve() {
        let mut c = ctx(SweepAxis::X);
        let a = insert_box(&mut c, Vec2::ZERO, Vec2::splat(4.0), 0, BodyFlags::empty());
        let b = insert_box(
            &mut c,
            Vec2::new(3.0, 0.0),
            Vec2::splat(4.0),
            PRIORITY_STATIC,
            BodyFlags::empty(),
        );
        c.resolve_collisions();
        assert!(c.collided(a).unwrap());
        c.place(a, Vec2::new(100.0, 100.0)).unwrap();
        c.resolve_collisions();
        assert!(!c.collided(a).unwrap());
        assert!(!c.collided(b).unwrap());
    }

    #[test]
    fn test_chain_resolves_along_sweep() {
        // Three equal bodies overlapping in a row on y, swept on y.
        let mut c = ctx(SweepAxis::Y);
        let ids: Vec<_> = (0..3)
            .map(|i| insert_box(&mut c, Vec2::new(0.0, i as f32 * 3.0), Vec2::splat(4.0), 0, BodyFlags::empty()))
            .collect();
        c.resolve_collisions();
        for id in &ids {
            assert!(c.collided(*id).unwrap());
        }
        assert!(c.stats().resolved_pairs >= 2);
    }

    #[test]
    fn test_stats_counters() {
        let mut c = ctx(SweepAxis::X);
        insert_box(&mut c, Vec2::ZERO, Vec2::splat(4.0), 0, BodyFlags::empty());
        insert_box(&mut c, Vec2::new(2.0, 0.0), Vec2::splat(4.0), 0, BodyFlags::empty());
        insert_box(&mut c, Vec2::new(20.0, 0.0), Vec2::splat(4.0), 0, BodyFlags::empty());
        c.resolve_collisions();
        let s = c.stats();
        assert_eq!(s.candidate_pairs, 1);
        assert_eq!(s.overlapping_pairs, 1);
        assert_eq!(s.resolved_pairs, 1);
    }
}
