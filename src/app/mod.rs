use crate::constants::NUCLEON_RADIUS;
use crate::renderer::camera::OrbitController;
use crate::renderer::renderer::Renderer;
use crate::renderer::scene::SceneFrame;
use crate::simulation::atom::Atom;
use crate::simulation::clock::FrameClock;
use crate::simulation::interaction::{self, HoverTracker, PointerEvent, Propagation};
use crate::simulation::picking::pick_nucleon;
use crate::simulation::starfield::{StarfieldConfig, StarfieldSampler};
use crate::ui::{HudText, NucleusUiState};
use glam::Vec2;
use log::info;
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::window::Window;

pub type AppError = Box<dyn std::error::Error + Send + Sync>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(not(target_arch = "wasm32"))]
use crate::ui::desktop::{UiFrame, UiLayer, draw_overlay};

// Pixels per wheel "line" when the platform reports pixel deltas.
const PIXELS_PER_SCROLL_LINE: f32 = 50.0;

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    atom: Atom,
    clock: FrameClock,
    controller: OrbitController,
    nucleus_ui: NucleusUiState,
    hover: HoverTracker,
    cursor: Option<Vec2>,
    #[cfg(not(target_arch = "wasm32"))]
    ui_layer: UiLayer,
}

impl App {
    pub async fn initialize(window: Arc<Window>) -> AppResult<Self> {
        let mut renderer = Renderer::new(window.clone()).await?;

        let atom = Atom::carbon();
        let counts = atom.counts();
        info!(
            "Composed {}: {} protons, {} neutrons, {} electrons",
            atom.element().name(),
            counts.protons,
            counts.neutrons,
            counts.electrons
        );

        let stars = StarfieldSampler::new().sample(StarfieldConfig::default());
        renderer.write_stars(&stars);

        let controller = OrbitController::new();
        controller.apply(renderer.camera_mut());

        #[cfg(not(target_arch = "wasm32"))]
        let ui_layer = UiLayer::new(&window, renderer.device(), renderer.surface_config().format);

        Ok(Self {
            window,
            renderer,
            atom,
            clock: FrameClock::start(),
            controller,
            nucleus_ui: NucleusUiState::default(),
            hover: HoverTracker::default(),
            cursor: None,
            #[cfg(not(target_arch = "wasm32"))]
            ui_layer,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.renderer.size()
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.renderer.resize(new_size);
    }

    /// Routes pointer input: overlay first, then the nucleus, then the camera.
    /// Returns true when the event was consumed.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let consumed = self.ui_layer.handle_event(&self.window, event);
            if consumed || (self.ui_layer.wants_pointer() && !self.controller.is_dragging()) {
                if matches!(event, WindowEvent::CursorMoved { .. }) {
                    if let Some(edge) = self.hover.update(false) {
                        self.send_nucleus_event(edge);
                    }
                }
                return consumed;
            }
        }

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = Vec2::new(position.x as f32, position.y as f32);
                self.cursor = Some(cursor);
                if self.controller.drag_to(cursor) {
                    self.controller.apply(self.renderer.camera_mut());
                    return true;
                }
                let hit = self.nucleus_hit(cursor);
                if let Some(edge) = self.hover.update(hit) {
                    self.send_nucleus_event(edge);
                }
                false
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                if let Some(edge) = self.hover.update(false) {
                    self.send_nucleus_event(edge);
                }
                false
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let Some(cursor) = self.cursor else {
                        return false;
                    };
                    if self.nucleus_hit(cursor)
                        && self.send_nucleus_event(PointerEvent::Click) == Propagation::Stop
                    {
                        return true;
                    }
                    self.controller.begin_drag(cursor);
                    true
                }
                ElementState::Released => {
                    let was_dragging = self.controller.is_dragging();
                    self.controller.end_drag();
                    was_dragging
                }
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => {
                        position.y as f32 / PIXELS_PER_SCROLL_LINE
                    }
                };
                self.controller.zoom(steps);
                self.controller.apply(self.renderer.camera_mut());
                true
            }
            _ => false,
        }
    }

    /// Advances the scene to the current clock reading.
    pub fn update(&mut self) {
        let elapsed = self.clock.elapsed();
        self.atom.advance(elapsed);
        self.renderer.update_scene(&SceneFrame::from_atom(&self.atom));
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let hud = HudText::from_atom(&self.atom);
        let ui_frame: UiFrame = {
            let (ui_layer, nucleus_ui) = (&mut self.ui_layer, &self.nucleus_ui);
            ui_layer.prepare(&self.window, |ctx| draw_overlay(ctx, &hud, nucleus_ui))
        };

        let mut pending_frame = Some(ui_frame);
        let (renderer, ui_layer) = (&mut self.renderer, &mut self.ui_layer);
        renderer.render_with_ui(|device, queue, encoder, view| {
            if let Some(frame) = pending_frame.take() {
                ui_layer.paint(device, queue, encoder, view, frame);
            }
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        crate::ui::web::render_overlay(&HudText::from_atom(&self.atom), &self.nucleus_ui);
        self.renderer.render()
    }

    fn nucleus_hit(&self, cursor: Vec2) -> bool {
        let size = self.renderer.size();
        let viewport = Vec2::new(size.width as f32, size.height as f32);
        let ray = self.renderer.camera().ray_through(cursor, viewport);
        pick_nucleon(&ray, self.atom.nucleus(), NUCLEON_RADIUS).is_some()
    }

    fn send_nucleus_event(&mut self, event: PointerEvent) -> Propagation {
        let propagation = interaction::dispatch(&mut self.nucleus_ui, event);
        self.window.set_cursor_icon(self.nucleus_ui.cursor_icon());
        propagation
    }
}
