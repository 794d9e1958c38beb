//! Window Shell
//!
//! Runs a [`Sketch`] in a winit window: one sketch frame and one rendered
//! frame per redraw, orbit camera on the mouse, camera panel and FPS stats
//! in the overlay.
//!
//! Native builds create the GPU context synchronously when the window is
//! resumed. The browser cannot block, so wasm builds request it in a local
//! future and hand the finished renderer back through the event loop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::camera::OrbitCamera;
use crate::game::clock::Instant;
use crate::game::config::DemoConfig;
use crate::game::scenes::Sketch;
use crate::game::types::Mesh;
use crate::game::ui::{CameraPanel, FpsStats, ScreenSize};
use crate::input::{KeyPress, MouseButton, MouseState};
use crate::render::{GpuContextConfig, Renderer};

/// Longest wall-clock frame fed to the sketch (tab switches, debugger pauses).
const MAX_FRAME_DT: f32 = 0.25;
/// Pixels of trackpad scroll per wheel line.
const PIXELS_PER_LINE: f32 = 50.0;

/// Delivered when an asynchronously created renderer is ready.
pub struct GpuReady(Renderer);

pub struct SketchApp<S: Sketch> {
    sketch: S,
    config: DemoConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: OrbitCamera,
    panel: CameraPanel,
    fps: FpsStats,
    mouse: MouseState,
    modifiers: ModifiersState,
    last_frame: Option<Instant>,
    #[cfg(target_arch = "wasm32")]
    proxy: Option<winit::event_loop::EventLoopProxy<GpuReady>>,
}

impl<S: Sketch + 'static> SketchApp<S> {
    pub fn new(sketch: S, config: DemoConfig) -> Self {
        let view = &config.view;
        let camera = OrbitCamera::looking_at(
            sketch.camera_position(),
            glam::Vec3::ZERO,
            view.width as f32 / view.height.max(1) as f32,
        );
        let panel = CameraPanel::new(view.panel_range, view.width as f32);
        Self {
            sketch,
            window: None,
            renderer: None,
            camera,
            panel,
            fps: FpsStats::new(),
            mouse: MouseState::new(),
            modifiers: ModifiersState::empty(),
            last_frame: None,
            #[cfg(target_arch = "wasm32")]
            proxy: None,
            config,
        }
    }

    /// Run until the window closes.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(mut self) {
        let event_loop = EventLoop::<GpuReady>::with_user_event()
            .build()
            .expect("Failed to create event loop");
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Err(err) = event_loop.run_app(&mut self) {
            log::error!("event loop exited with error: {err}");
        }
    }

    /// Hand the app to the browser's event loop. Returns immediately.
    #[cfg(target_arch = "wasm32")]
    pub fn run(mut self) {
        use winit::platform::web::EventLoopExtWebSys;

        let event_loop = EventLoop::<GpuReady>::with_user_event()
            .build()
            .expect("Failed to create event loop");
        event_loop.set_control_flow(ControlFlow::Poll);
        self.proxy = Some(event_loop.create_proxy());
        event_loop.spawn_app(self);
    }

    fn gpu_config(&self) -> GpuContextConfig {
        GpuContextConfig {
            vsync: self.config.view.vsync,
            ..GpuContextConfig::default()
        }
    }

    fn window_attributes(&self) -> WindowAttributes {
        let attrs = WindowAttributes::default()
            .with_title(self.sketch.title())
            .with_inner_size(PhysicalSize::new(self.config.view.width, self.config.view.height));
        #[cfg(target_arch = "wasm32")]
        let attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;
            attrs.with_append(true)
        };
        attrs
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn create_renderer(&mut self, window: Arc<Window>) {
        self.attach_renderer(Renderer::new(window, self.gpu_config()));
    }

    #[cfg(target_arch = "wasm32")]
    fn create_renderer(&mut self, window: Arc<Window>) {
        let Some(proxy) = self.proxy.clone() else {
            log::error!("no event loop proxy, cannot create renderer");
            return;
        };
        let config = self.gpu_config();
        wasm_bindgen_futures::spawn_local(async move {
            let renderer = Renderer::new_async(window, config).await;
            if proxy.send_event(GpuReady(renderer)).is_err() {
                log::error!("event loop closed before the renderer was ready");
            }
        });
    }

    fn attach_renderer(&mut self, renderer: Renderer) {
        let (width, height) = renderer.dimensions();
        self.camera.resize(width, height);
        self.panel.resize(width as f32);
        self.renderer = Some(renderer);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(size.width, size.height);
        }
        self.camera.resize(size.width, size.height);
        self.panel.resize(size.width as f32);
    }

    fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.mouse.set_button(button, pressed);

        if button == MouseButton::Left {
            if pressed
                && let Some((x, y)) = self.mouse.position
                && self.panel.on_mouse_press(x, y, &mut self.camera.position)
            {
                return;
            }
            if !pressed && self.panel.on_mouse_release() {
                return;
            }
        }
        self.camera.handle_mouse_button(button, pressed);
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let (dx, dy) = self.mouse.move_to(x, y);
        if !self.panel.on_mouse_move(x, &mut self.camera.position) {
            self.camera.handle_mouse_move(dx, dy);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(self.config.physics.fixed_step, |last| now.duration_since(last).as_secs_f32())
            .min(MAX_FRAME_DT);
        self.last_frame = Some(now);

        self.fps.begin();
        self.sketch.frame(dt);
        self.panel.sync_from(self.camera.position);

        if let Some(renderer) = self.renderer.as_mut() {
            let (width, height) = renderer.dimensions();
            let screen = ScreenSize::new(width, height);
            let mut overlay = Mesh::new();
            self.fps.draw(&mut overlay, &self.sketch.status(), screen);
            self.panel.draw(&mut overlay, screen);

            match renderer.render(self.sketch.scene(), self.camera.view_projection_matrix(), &overlay) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                }
                Err(err) => log::warn!("frame skipped: {err}"),
            }
        }
        self.fps.end();
    }
}

impl<S: Sketch + 'static> ApplicationHandler<GpuReady> for SketchApp<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = Arc::new(
            event_loop
                .create_window(self.window_attributes())
                .expect("Failed to create window"),
        );
        log::info!("window created for '{}'", self.sketch.title());
        self.window = Some(Arc::clone(&window));
        self.create_renderer(window);
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: GpuReady) {
        self.attach_renderer(event.0);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.on_resize(size),
            WindowEvent::ModifiersChanged(modifiers) => self.modifiers = modifiers.state(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                    return;
                }
                if let Some(press) = KeyPress::from_winit(&event, self.modifiers) {
                    let command = self.sketch.on_key(&press);
                    log::trace!("{press:?} -> {command:?}");
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_button(button.into(), state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.mouse.position = None,
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
