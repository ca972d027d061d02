use std::time::Instant;

use glam::Vec2;
use shove::*;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn build_context(n: usize, axis: SweepAxis, seed0: u32) -> Context {
    let mut ctx = Context::new(ContextConfig {
        expected_bodies: n,
        sweep_axis: axis,
    })
    .expect("reserve body storage");
    let mut seed = seed0;
    for i in 0..n {
        let rx = (lcg(&mut seed) as f32 / u32::MAX as f32) * 400.0 - 200.0;
        let ry = (lcg(&mut seed) as f32 / u32::MAX as f32) * 400.0 - 200.0;
        let priority = if i % 8 == 0 { PRIORITY_STATIC } else { 0 };
        ctx.insert(
            Vec2::new(rx, ry),
            Vec2::splat(1.0),
            Anchor::Center,
            priority,
            BodyFlags::empty(),
            0,
        )
        .expect("register body");
    }
    ctx
}

fn main() {
    let n_vals = [5_000usize, 10_000, 20_000];
    let axes = [SweepAxis::X, SweepAxis::Y];
    println!("n,axis,resolve_ms,candidate_pairs,overlapping_pairs,resolved_pairs");
    for &n in &n_vals {
        for &axis in &axes {
            let mut ctx = build_context(n, axis, 1);
            let t0 = Instant::now();
            ctx.resolve_collisions();
            let ms = t0.elapsed().as_secs_f64() * 1000.0;
            let s = ctx.stats();
            println!(
                "{},{:?},{:.3},{},{},{}",
                n, axis, ms, s.candidate_pairs, s.overlapping_pairs, s.resolved_pairs
            );
        }
    }
}
