use crate::constants::CONTROLS_HINT;
use crate::simulation::atom::Atom;
use winit::window::CursorIcon;

/// Transient nucleus UI flags. Two independent axes:
/// collapsed/expanded (info panel) and idle/hovered (cursor).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NucleusUiState {
    expanded: bool,
    hovered: bool,
}

impl NucleusUiState {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        if self.hovered {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        }
    }
}

/// Overlay text derived from the composed atom.
#[derive(Clone, Debug, PartialEq)]
pub struct HudText {
    pub title: String,
    pub protons: usize,
    pub neutrons: usize,
    pub electrons: usize,
    pub mass_label: String,
}

impl HudText {
    pub fn from_atom(atom: &Atom) -> Self {
        let counts = atom.counts();
        let element = atom.element();
        Self {
            title: element.isotope_label(counts.protons + counts.neutrons),
            protons: counts.protons,
            neutrons: counts.neutrons,
            electrons: counts.electrons,
            mass_label: element.mass_label(),
        }
    }

    pub fn count_lines(&self) -> [String; 3] {
        [
            format!("Protons: {}", self.protons),
            format!("Neutrons: {}", self.neutrons),
            format!("Electrons: {}", self.electrons),
        ]
    }

    pub fn nucleus_lines(&self) -> [String; 3] {
        [
            format!("Protons: {}", self.protons),
            format!("Neutrons: {}", self.neutrons),
            format!("Mass number: {}", self.protons + self.neutrons),
        ]
    }

    pub fn controls(&self) -> &'static [&'static str] {
        &CONTROLS_HINT
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod desktop {
    use super::{HudText, NucleusUiState};
    use egui::ClippedPrimitive;
    use egui_wgpu::{Renderer, ScreenDescriptor};
    use egui_winit::{State as EguiWinitState, pixels_per_point};
    use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
    use winit::{event::WindowEvent, window::Window};

    pub struct UiLayer {
        ctx: egui::Context,
        state: EguiWinitState,
        renderer: Renderer,
        screen_desc: ScreenDescriptor,
    }

    pub struct UiFrame {
        pub shapes: Vec<ClippedPrimitive>,
        pub textures_delta: egui::TexturesDelta,
    }

    impl UiLayer {
        pub fn new(window: &Window, device: &Device, surface_format: TextureFormat) -> Self {
            let ctx = egui::Context::default();
            let state = EguiWinitState::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                window,
                Some(window.scale_factor() as f32),
                None,
            );

            let mut layer = Self {
                ctx,
                state,
                renderer: Renderer::new(device, surface_format, None, 1),
                screen_desc: ScreenDescriptor {
                    size_in_pixels: [1, 1],
                    pixels_per_point: 1.0,
                },
            };
            layer.update_screen_descriptor(window);
            layer
        }

        pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
            let response = self.state.on_window_event(window, event);
            if response.repaint {
                window.request_redraw();
            }
            response.consumed
        }

        /// True while the pointer is over an egui panel.
        pub fn wants_pointer(&self) -> bool {
            self.ctx.wants_pointer_input() || self.ctx.is_pointer_over_area()
        }

        pub fn prepare<F>(&mut self, window: &Window, mut build_ui: F) -> UiFrame
        where
            F: FnMut(&egui::Context),
        {
            self.update_screen_descriptor(window);
            let raw_input = self.state.take_egui_input(window);
            let full_output = self.ctx.run(raw_input, |ctx| build_ui(ctx));
            self.state
                .handle_platform_output(window, full_output.platform_output);

            self.screen_desc.pixels_per_point = full_output.pixels_per_point;

            let shapes = self
                .ctx
                .tessellate(full_output.shapes, self.screen_desc.pixels_per_point);

            UiFrame {
                shapes,
                textures_delta: full_output.textures_delta,
            }
        }

        pub fn paint(
            &mut self,
            device: &Device,
            queue: &Queue,
            encoder: &mut CommandEncoder,
            view: &TextureView,
            frame: UiFrame,
        ) {
            let UiFrame {
                shapes,
                mut textures_delta,
            } = frame;

            for (id, image_delta) in textures_delta.set.drain(..) {
                self.renderer
                    .update_texture(device, queue, id, &image_delta);
            }

            let callback_buffers =
                self.renderer
                    .update_buffers(device, queue, encoder, &shapes, &self.screen_desc);

            if !callback_buffers.is_empty() {
                queue.submit(callback_buffers);
            }

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui-ui-pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
                self.renderer
                    .render(&mut render_pass, &shapes, &self.screen_desc);
            }

            for id in textures_delta.free.drain(..) {
                self.renderer.free_texture(&id);
            }
        }

        fn update_screen_descriptor(&mut self, window: &Window) {
            let size = window.inner_size();
            self.screen_desc.size_in_pixels = [size.width.max(1), size.height.max(1)];
            self.screen_desc.pixels_per_point = pixels_per_point(&self.ctx, window);
        }
    }

    /// Title, counts and legend, plus the nucleus panel while expanded.
    pub fn draw_overlay(ctx: &egui::Context, hud: &HudText, state: &NucleusUiState) {
        use egui::{Align2, Area, Frame, RichText};

        Area::new(egui::Id::new("atom-summary"))
            .anchor(Align2::LEFT_TOP, [16.0, 16.0])
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new(&hud.title).heading().strong());
                for line in hud.count_lines() {
                    ui.label(line);
                }
                ui.label(format!("Atomic mass: {}", hud.mass_label));
            });

        Area::new(egui::Id::new("controls-hint"))
            .anchor(Align2::LEFT_BOTTOM, [16.0, -16.0])
            .interactable(false)
            .show(ctx, |ui| {
                for hint in hud.controls() {
                    ui.label(RichText::new(*hint).small().weak());
                }
            });

        if state.expanded() {
            Area::new(egui::Id::new("nucleus-info"))
                .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
                .interactable(false)
                .show(ctx, |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(RichText::new("Nucleus").strong());
                        for line in hud.nucleus_lines() {
                            ui.label(line);
                        }
                    });
                });
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub mod web {
    use super::{HudText, NucleusUiState};

    const SUMMARY_ID: &str = "overlay";
    const NUCLEUS_INFO_ID: &str = "nucleus-info";

    /// Writes the overlay into the host page. Missing elements are skipped;
    /// only the canvas is a required mount target.
    pub fn render_overlay(hud: &HudText, state: &NucleusUiState) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };

        if let Some(summary) = document.get_element_by_id(SUMMARY_ID) {
            let mut html = format!("<h1>{}</h1>", hud.title);
            for line in hud.count_lines() {
                html.push_str(&format!("<p>{line}</p>"));
            }
            html.push_str(&format!("<p>Atomic mass: {}</p>", hud.mass_label));
            html.push_str("<ul class=\"controls\">");
            for hint in hud.controls() {
                html.push_str(&format!("<li>{hint}</li>"));
            }
            html.push_str("</ul>");
            summary.set_inner_html(&html);
        }

        if let Some(info) = document.get_element_by_id(NUCLEUS_INFO_ID) {
            let html: String = hud
                .nucleus_lines()
                .iter()
                .map(|line| format!("<p>{line}</p>"))
                .collect();
            info.set_inner_html(&format!("<h2>Nucleus</h2>{html}"));
            let result = if state.expanded() {
                info.remove_attribute("hidden")
            } else {
                info.set_attribute("hidden", "")
            };
            if let Err(err) = result {
                log::warn!("Failed to toggle nucleus info: {err:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_collapsed_and_idle() {
        let state = NucleusUiState::default();
        assert!(!state.expanded());
        assert!(!state.hovered());
        assert_eq!(state.cursor_icon(), CursorIcon::Default);
    }

    #[test]
    fn axes_are_independent() {
        let mut state = NucleusUiState::default();
        state.set_hovered(true);
        state.toggle_expanded();
        assert!(state.expanded() && state.hovered());
        assert_eq!(state.cursor_icon(), CursorIcon::Pointer);

        state.set_hovered(false);
        assert!(state.expanded());
        state.toggle_expanded();
        assert_eq!(state, NucleusUiState::default());
    }

    #[test]
    fn hud_follows_live_counts() {
        let mut atom = Atom::carbon();
        let hud = HudText::from_atom(&atom);
        assert_eq!(hud.title, "Carbon-12");
        assert_eq!(hud.mass_label, "12.011 u");
        assert_eq!(
            hud.count_lines(),
            [
                "Protons: 6".to_owned(),
                "Neutrons: 6".to_owned(),
                "Electrons: 6".to_owned(),
            ]
        );
        assert_eq!(hud.controls().len(), 3);

        atom.set_nucleon_counts(6, 7);
        let hud = HudText::from_atom(&atom);
        assert_eq!(hud.title, "Carbon-13");
        assert_eq!(hud.nucleus_lines()[2], "Mass number: 13");
    }
}
