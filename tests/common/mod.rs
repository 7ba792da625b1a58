#![allow(dead_code)]

use julia_wasm::{Backend, RenderContext, Scheduler, Surface, Uniform};

/// Window of a fixed, adjustable size with a recorded canvas.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub window: (u32, u32),
    pub canvas: Option<(u32, u32)>,
    pub placed: Option<(f64, f64)>,
}

impl FakeSurface {
    pub fn sized(width: u32, height: u32) -> Self {
        Self { window: (width, height), ..Self::default() }
    }
}

impl Surface for FakeSurface {
    fn window_size(&self) -> (u32, u32) {
        self.window
    }

    fn resize_canvas(&mut self, width: u32, height: u32) {
        self.canvas = Some((width, height));
    }

    fn place_canvas(&mut self, left: f64, top: f64) {
        self.placed = Some((left, top));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Viewport(u32, u32),
    Float(Uniform, f32),
    Vec2(Uniform, [f32; 2]),
    Draw,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
}

impl RecordingBackend {
    pub fn last_float(&self, uniform: Uniform) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Float(u, v) if *u == uniform => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec2(&self, uniform: Uniform) -> Option<[f32; 2]> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Vec2(u, v) if *u == uniform => Some(*v),
            _ => None,
        })
    }

    pub fn draws(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Draw).count()
    }
}

impl Backend for RecordingBackend {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.push(Call::Viewport(width, height));
    }

    fn set_float(&mut self, uniform: Uniform, value: f32) {
        self.calls.push(Call::Float(uniform, value));
    }

    fn set_vec2(&mut self, uniform: Uniform, value: [f32; 2]) {
        self.calls.push(Call::Vec2(uniform, value));
    }

    fn draw_quad(&mut self) {
        self.calls.push(Call::Draw);
    }
}

#[derive(Debug, Default)]
pub struct CountingScheduler {
    pub requests: usize,
}

impl Scheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

pub fn context(width: u32, height: u32) -> RenderContext<FakeSurface, RecordingBackend> {
    RenderContext::new(FakeSurface::sized(width, height), RecordingBackend::default(), 100)
}
