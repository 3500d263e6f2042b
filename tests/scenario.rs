//! End-to-end behavior of the headless pipeline: sample a tiny image, build
//! the field, drive it with pointers through the influence engine and check
//! that particles scatter and settle as expected.

use pxdrift::{
    contentful_pixels, InfluenceEngine, ParticleField, PointerTracker, Vec2, Viewport,
};

/// 2x2 RGBA image: red, black, green, near-black-but-contentful.
fn tiny_image() -> (u32, u32, Vec<u8>) {
    #[rustfmt::skip]
    let rgba = vec![
        255, 0, 0, 255, //  (0,0) kept, sum 255
        0, 0, 0, 255,   //  (1,0) dropped, sum 0
        0, 255, 0, 255, //  (0,1) kept, sum 255
        10, 10, 10, 255, // (1,1) kept, sum 30
    ];
    (2, 2, rgba)
}

#[test]
fn tiny_image_keeps_three_particles() {
    let (w, h, rgba) = tiny_image();
    let seeds = contentful_pixels(w, h, &rgba);
    assert_eq!(seeds.len(), 3);

    let field = ParticleField::new(&seeds, w, h);
    assert_eq!(field.len(), 3);

    // Centered around the 2x2 image midpoint, rows flipped to Y-up.
    assert_eq!(field.positions()[0], Vec2::new(-1.0, 1.0));
    assert_eq!(field.positions()[1], Vec2::new(-1.0, 0.0));
    assert_eq!(field.positions()[2], Vec2::new(0.0, 0.0));
}

#[test]
fn particles_stay_at_rest_under_a_distant_pointer() {
    let (w, h, rgba) = tiny_image();
    let seeds = contentful_pixels(w, h, &rgba);
    let mut field = ParticleField::new(&seeds, w, h);
    let mut engine = InfluenceEngine::with_seed(1);

    let viewport = Viewport::new(800.0, 600.0);
    let mut tracker = PointerTracker::new(false);
    tracker.set_window_height(viewport.height());
    // Far beyond every influence radius (all radii squared are below 10000).
    tracker.move_primary(20_000.0, 20_000.0);

    for _ in 0..60 {
        engine.step(&mut field, &tracker, viewport.anchor(), 1.0 / 144.0);
    }

    for i in 0..field.len() {
        let drift = (field.positions()[i] - field.original_positions()[i]).length();
        assert!(drift < 1e-3, "particle {} drifted {}", i, drift);
        assert!(field.velocities()[i].length() < 1e-3);
    }
}

#[test]
fn scattered_particles_settle_back_once_the_pointer_leaves() {
    let (w, h, rgba) = tiny_image();
    let seeds = contentful_pixels(w, h, &rgba);
    let mut field = ParticleField::new(&seeds, w, h);
    let mut engine = InfluenceEngine::with_seed(2);

    let viewport = Viewport::new(800.0, 600.0);
    let anchor = viewport.anchor();
    let mut tracker = PointerTracker::new(false);
    tracker.set_window_height(viewport.height());

    // Park the pointer on the field center so every particle is influenced.
    tracker.move_primary(anchor.x, viewport.height() - anchor.y);
    let mut max_drift = 0.0f32;
    for _ in 0..30 {
        engine.step(&mut field, &tracker, anchor, 1.0 / 144.0);
        for i in 0..field.len() {
            let drift = (field.positions()[i] - field.original_positions()[i]).length();
            max_drift = max_drift.max(drift);
        }
    }
    assert!(
        max_drift > 1.0,
        "pointer at the field center should displace particles"
    );

    // Pull the pointer far away; damping brings every particle home.
    tracker.move_primary(20_000.0, 20_000.0);
    for _ in 0..300 {
        engine.step(&mut field, &tracker, anchor, 1.0 / 144.0);
    }
    for i in 0..field.len() {
        let drift = (field.positions()[i] - field.original_positions()[i]).length();
        assert!(drift < 1e-3, "particle {} still displaced by {}", i, drift);
        assert!(field.velocities()[i].length() < 1e-3);
    }
}

#[test]
fn touch_and_mouse_pipelines_share_the_same_dynamics() {
    let (w, h, rgba) = tiny_image();
    let seeds = contentful_pixels(w, h, &rgba);
    let mut field = ParticleField::new(&seeds, w, h);
    let mut engine = InfluenceEngine::with_seed(3);

    let viewport = Viewport::new(800.0, 600.0);
    let anchor = viewport.anchor();
    let mut tracker = PointerTracker::new(true);
    tracker.set_window_height(viewport.height());

    tracker.begin_or_update_touch(1, anchor.x, viewport.height() - anchor.y);
    let mut max_drift = 0.0f32;
    for _ in 0..30 {
        engine.step(&mut field, &tracker, anchor, 1.0 / 144.0);
        for i in 0..field.len() {
            let drift = (field.positions()[i] - field.original_positions()[i]).length();
            max_drift = max_drift.max(drift);
        }
    }
    assert!(max_drift > 1.0);

    // Lifting the touch leaves no pointers, so the field freezes in place.
    tracker.end_touch(1);
    let before: Vec<Vec2> = field.positions().to_vec();
    for _ in 0..10 {
        engine.step(&mut field, &tracker, anchor, 1.0 / 144.0);
    }
    assert_eq!(field.positions(), before.as_slice());
}
