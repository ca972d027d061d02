use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Narrow-phase pair resolution.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn overlap_depths(a: &Rect, b: &Rect) -> Vec2 {
        let delta = a.center() - b.center();
        // abs is a sign-bit clear; near-tie depths must stay bit-exact
        // because they decide the separation axis.
        a.half_extents() + b.half_extents() - delta.abs()
    }

    fn resolve_pair(
        a: &mut Body,
        a_tick: &mut TickData,
        b: &mut Body,
        b_tick: &mut TickData,
    ) -> bool {
        if a.is_static() && b.is_static() {
            return false;
        }

        a_tick.flags |= TickFlags::COLLIDED;
        b_tick.flags |= TickFlags::COLLIDED;

        a_tick.custom_flags |= b.custom_flags;
        b_tick.custom_flags |= a.custom_flags;

        let delta = a.rect.center() - b.rect.center();
        let overlap = Self::overlap_depths(&a.rect, &b.rect);

        // Least-penetration axis; an exact tie separates along x.
        if overlap.x > overlap.y {
            Self::separate_y(a, a_tick, b, b_tick, delta.y, overlap.y);
        } else {
            Self::separate_x(a, a_tick, b, b_tick, delta.x, overlap.x);
        }
        true
    }
}

impl Narrowphase {
    fn separate_x(
        a: &mut Body,
        a_tick: &mut TickData,
        b: &mut Body,
        b_tick: &mut TickData,
        delta: f32,
        depth: f32,
    ) {
        // `a` is pushed toward its own side of the pair; zero delta pushes
        // negative.
        let dir = if delta > 0.0 { 1.0f32 } else { -1.0 };
        let (a_flag, a_wall) = if delta > 0.0 {
            (TickFlags::RIGHT, TickFlags::RIGHT_WALL)
        } else {
            (TickFlags::LEFT, TickFlags::LEFT_WALL)
        };
        let (b_flag, b_wall) = if delta > 0.0 {
            (TickFlags::LEFT, TickFlags::LEFT_WALL)
        } else {
            (TickFlags::RIGHT, TickFlags::RIGHT_WALL)
        };
        let push = Vec2::new(dir * depth, 0.0);
        Self::push_apart(a, a_tick, a_flag, a_wall, b, b_tick, b_flag, b_wall, push);
    }

    fn separate_y(
        a: &mut Body,
        a_tick: &mut TickData,
        b: &mut Body,
        b_tick: &mut TickData,
        delta: f32,
        depth: f32,
    ) {
        // +y is down in screen coordinates: pushed up means landed on a
        // floor, pushed down means bumped a ceiling.
        let dir = if delta > 0.0 { 1.0f32 } else { -1.0 };
        let (a_flag, a_wall) = if delta > 0.0 {
            (TickFlags::DOWN, TickFlags::CEILING)
        } else {
            (TickFlags::UP, TickFlags::FLOOR)
        };
        let (b_flag, b_wall) = if delta > 0.0 {
            (TickFlags::UP, TickFlags::FLOOR)
        } else {
            (TickFlags::DOWN, TickFlags::CEILING)
        };
        let push = Vec2::new(0.0, dir * depth);
        Self::push_apart(a, a_tick, a_flag, a_wall, b, b_tick, b_flag, b_wall, push);
    }

    /// Apply the priority-weighted correction: the lower-priority body takes
    /// the full push, equals split it, and a mover pushed off a static gets
    /// the matching contact flag. Direction flags land on both bodies.
    #[allow(clippy::too_many_arguments)]
    fn push_apart(
        a: &mut Body,
        a_tick: &mut TickData,
        a_flag: TickFlags,
        a_wall: TickFlags,
        b: &mut Body,
        b_tick: &mut TickData,
        b_flag: TickFlags,
        b_wall: TickFlags,
        push: Vec2,
    ) {
        if a.priority < b.priority {
            a.rect.translate(push);
            if b.is_static() {
                a_tick.flags |= a_wall;
            }
        } else if a.priority == b.priority {
            a.rect.translate(push / 2.0);
            b.rect.translate(-push / 2.0);
        } else {
            b.rect.translate(-push);
            if a.is_static() {
                b_tick.flags |= b_wall;
            }
        }

        a_tick.flags |= a_flag;
        b_tick.flags |= b_flag;
    }
}
