use glam::Vec2;
use shove::*;

const TAG_HAZARD: u32 = 0x1;

fn main() {
    let mut ctx = Context::new(ContextConfig::default()).expect("reserve body storage");

    // Screen coordinates: +y is down, so the floor sits at large y.
    let floor = ctx
        .insert(
            Vec2::new(0.0, 100.0),
            Vec2::new(200.0, 10.0),
            Anchor::TopLeft,
            PRIORITY_STATIC,
            BodyFlags::empty(),
            0,
        )
        .expect("insert floor");
    let wall = ctx
        .insert(
            Vec2::new(160.0, 0.0),
            Vec2::new(10.0, 100.0),
            Anchor::TopLeft,
            PRIORITY_STATIC,
            BodyFlags::empty(),
            0,
        )
        .expect("insert wall");
    let spikes = ctx
        .insert(
            Vec2::new(100.0, 95.0),
            Vec2::new(20.0, 5.0),
            Anchor::TopLeft,
            PRIORITY_STATIC,
            BodyFlags::empty(),
            TAG_HAZARD,
        )
        .expect("insert spikes");
    let player = ctx
        .insert(
            Vec2::new(20.0, 60.0),
            Vec2::new(8.0, 12.0),
            Anchor::BottomCenter,
            0,
            BodyFlags::empty(),
            0,
        )
        .expect("insert player");

    println!(
        "scene: floor={:?} wall={:?} spikes={:?} player={:?}",
        floor, wall, spikes, player
    );

    // Fall onto the floor, run right across the spikes, end up against the
    // wall.
    let step = Vec2::new(12.0, 10.0);
    for tick in 0..12 {
        ctx.translate(player, step).expect("move player");
        ctx.resolve_collisions();

        let pos = ctx.position(player).expect("player pos");
        let data = ctx.tick_data(player).expect("player tick data");
        println!(
            "tick {:2}: pos=({:6.1},{:6.1}) floor={:5} wall={:5} hazard={}",
            tick,
            pos.x,
            pos.y,
            ctx.collided_floor(player).expect("query"),
            ctx.collided_wall(player).expect("query"),
            data.custom_flags & TAG_HAZARD != 0,
        );
    }
}
