//! Interactive sandbox demo.
//!
//! Opens a window, fills the sandbox with falling shapes, and lets the
//! mouse drag them around. Rendering stays with the host by design; this
//! demo periodically logs the debug vertex stream instead of uploading it.

use marionette::{Sandbox, WindowSignals};
use marionette_core::math::Vec2;
use marionette_debug_drawer::DebugDrawer;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

struct DemoApp {
    window: Option<Window>,
    sandbox: Sandbox,
    signals: WindowSignals,
    drawer: DebugDrawer,
    frames: u64,
}

impl DemoApp {
    fn new() -> Self {
        let mut sandbox = Sandbox::new(Vec2::new(WIDTH, HEIGHT));
        sandbox.init(true);
        populate(&mut sandbox);

        let mut signals = WindowSignals::new();
        signals.connect();

        Self {
            window: None,
            sandbox,
            signals,
            drawer: DebugDrawer::new(),
            frames: 0,
        }
    }
}

fn populate(sandbox: &mut Sandbox) {
    for i in 0..8 {
        let x = 160.0 + 120.0 * i as f32;
        sandbox.create_box(Vec2::new(x, 160.0), Vec2::new(48.0, 48.0));
        sandbox.create_circle(Vec2::new(x + 40.0, 60.0), 18.0);
    }

    let hull: Vec<Vec2> = (0..6)
        .map(|i| {
            let angle = i as f32 / 6.0 * std::f32::consts::TAU;
            Vec2::new(angle.cos(), angle.sin()) * 36.0
        })
        .collect();
    sandbox.create_fan_shape(Vec2::new(WIDTH * 0.5, 260.0), &hull);
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title("marionette sandbox")
            .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("window creation failed: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.signals.process(&mut self.sandbox, &event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                self.sandbox
                    .set_viewport(Vec2::new(size.width as f32, size.height as f32));
            }

            WindowEvent::RedrawRequested => {
                self.drawer.advance_tick();
                self.sandbox.step();
                let _uniforms = self.sandbox.debug_draw(&self.drawer);

                self.frames += 1;
                if self.frames % 120 == 0 {
                    let vertices = self.drawer.take_render_data();
                    log::info!(
                        "frame {}: {} bodies, {} contacts, {} debug vertices",
                        self.frames,
                        self.sandbox.body_count(),
                        self.sandbox.contact_count(),
                        vertices.len()
                    );
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {err}");
    }
}
