mod common;

use common::{context, Call, CountingScheduler};
use julia_wasm::consts::PALETTE_PERIOD_MS;
use julia_wasm::julia::{parameter, Complex};
use julia_wasm::{AnimationState, FrameDriver, Phase, Uniform};

const EPSILON: f32 = 1e-6;

fn driver() -> FrameDriver<CountingScheduler> {
    FrameDriver::new(CountingScheduler::default(), PALETTE_PERIOD_MS)
}

// --- Idle ---

#[test]
fn driver_starts_idle() {
    let d = driver();
    assert_eq!(d.phase(), Phase::Idle);
    assert_eq!(d.animation(), AnimationState::NotStarted);
    assert_eq!(d.scheduler().requests, 0);
}

#[test]
fn small_window_stays_idle_without_backend_writes() {
    let mut ctx = context(90, 600);
    let mut d = driver();
    for t in [0.0, 16.0, 32.0] {
        d.on_frame(&mut ctx, t);
    }
    assert_eq!(d.phase(), Phase::Idle);
    assert_eq!(d.animation(), AnimationState::NotStarted);
    assert!(ctx.backend().calls.is_empty());
    assert_eq!(d.scheduler().requests, 3);
}

#[test]
fn idle_driver_arms_once_window_grows() {
    let mut ctx = context(90, 90);
    let mut d = driver();
    d.on_frame(&mut ctx, 0.0);
    ctx.surface_mut().window = (800, 600);
    d.on_frame(&mut ctx, 16.0);
    assert_eq!(d.phase(), Phase::Running);
    assert_eq!(d.animation(), AnimationState::Running { start_ms: 16.0 });
}

// --- Running ---

#[test]
fn first_usable_frame_starts_and_draws() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    d.on_frame(&mut ctx, 1_000.0);
    assert_eq!(d.phase(), Phase::Running);
    assert_eq!(d.animation(), AnimationState::Running { start_ms: 1_000.0 });
    assert_eq!(ctx.backend().draws(), 1);
    assert_eq!(ctx.backend().last_float(Uniform::PaletteShift), Some(0.0));
    assert_eq!(d.scheduler().requests, 1);
}

#[test]
fn start_time_is_recorded_once() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    d.on_frame(&mut ctx, 500.0);
    d.on_frame(&mut ctx, 516.0);
    d.on_frame(&mut ctx, 532.0);
    assert_eq!(d.animation(), AnimationState::Running { start_ms: 500.0 });
}

#[test]
fn every_frame_draws_once_and_reschedules() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    for i in 0..5 {
        d.on_frame(&mut ctx, f64::from(i) * 16.0);
    }
    assert_eq!(ctx.backend().draws(), 5);
    assert_eq!(d.scheduler().requests, 5);
}

#[test]
fn viewport_is_configured_only_once_without_resize() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    for i in 0..4 {
        d.on_frame(&mut ctx, f64::from(i) * 16.0);
    }
    let viewport_writes = ctx
        .backend()
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Viewport(..)))
        .count();
    assert_eq!(viewport_writes, 1);
}

#[test]
fn palette_shift_cycles_every_ten_seconds() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    let start = 1_000.0;
    let mut sample = |dt: f64| {
        d.on_frame(&mut ctx, start + dt);
        ctx.backend().last_float(Uniform::PaletteShift).unwrap()
    };
    assert_eq!(sample(0.0), 0.0);
    assert_eq!(sample(5_000.0), 0.5);
    assert!((sample(9_999.0) - 0.9999).abs() < 1e-5);
    assert_eq!(sample(10_000.0), 0.0);
}

#[test]
fn pointer_sampled_each_frame_with_flipped_y() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    d.on_frame(&mut ctx, 0.0);
    let offset = julia_wasm::pointer::CanvasOffset::default();
    ctx.pointer_moved(100.0, 50.0, &offset);
    d.on_frame(&mut ctx, 16.0);
    assert_eq!(ctx.backend().last_vec2(Uniform::MousePos), Some([100.0, 550.0]));
}

#[test]
fn resize_reconfigures_before_drawing() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    d.on_frame(&mut ctx, 0.0);
    ctx.surface_mut().window = (1280, 720);
    ctx.request_resize();
    d.on_frame(&mut ctx, 16.0);
    assert_eq!(ctx.backend().last_float(Uniform::Width), Some(1280.0));
    assert_eq!(ctx.backend().last_float(Uniform::Height), Some(720.0));
    assert!(!ctx.resize_pending());
    assert_eq!(ctx.backend().calls.last(), Some(&Call::Draw));
}

#[test]
fn unusable_resize_keeps_drawing_previous_viewport() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    d.on_frame(&mut ctx, 0.0);
    ctx.surface_mut().window = (40, 600);
    ctx.request_resize();
    d.on_frame(&mut ctx, 16.0);
    assert_eq!(d.phase(), Phase::Running);
    assert_eq!(ctx.backend().last_float(Uniform::Width), Some(800.0));
    assert_eq!(ctx.backend().draws(), 2);
    assert!(ctx.resize_pending());

    ctx.surface_mut().window = (640, 480);
    d.on_frame(&mut ctx, 32.0);
    assert_eq!(ctx.backend().last_float(Uniform::Width), Some(640.0));
    assert!(!ctx.resize_pending());
}

// --- end to end ---

#[test]
fn midpoint_pointer_maps_to_canonical_parameter() {
    let mut ctx = context(800, 600);
    let mut d = driver();
    d.on_frame(&mut ctx, 0.0);

    let backend = ctx.backend();
    assert_eq!(backend.last_float(Uniform::Width), Some(800.0));
    assert_eq!(backend.last_float(Uniform::Height), Some(600.0));
    assert_eq!(backend.last_float(Uniform::PaletteShift), Some(0.0));
    let mouse = backend.last_vec2(Uniform::MousePos).unwrap();
    assert_eq!(mouse, [400.0, 300.0]);

    let c0 = parameter(mouse, 800.0, 600.0);
    let expected = Complex::new(-0.4, 0.625);
    assert!((c0.re - expected.re).abs() < EPSILON, "c0 = {c0:?}");
    assert!((c0.im - expected.im).abs() < EPSILON, "c0 = {c0:?}");
}
