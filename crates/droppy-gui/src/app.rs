use std::cell::Cell;
use std::rc::Rc;

use droppy_core::autocrop::Bounds;
use droppy_core::consts::TUNER_SIGMA_MAX;
use droppy_core::{extract_edges, EdgeParams};
use ndarray::Array2;
use tracing::{debug, warn};

use crate::convert::overlay_to_color_image;
use crate::state::TunerState;

/// Live Canny preview with sliders for sigma and the two thresholds.
pub struct TunerApp {
    image: Array2<f32>,
    view: Option<Bounds>,
    state: TunerState,
    /// Parameters the current texture was rendered with.
    rendered: Option<EdgeParams>,
    texture: Option<egui::TextureHandle>,
    edge_count: usize,
    /// Latest accepted parameters, read back once the window closes.
    result: Rc<Cell<EdgeParams>>,
}

impl TunerApp {
    pub fn new(
        image: Array2<f32>,
        initial: EdgeParams,
        view: Option<Bounds>,
        result: Rc<Cell<EdgeParams>>,
    ) -> Self {
        let state = TunerState::new(initial);
        result.set(state.params());
        Self {
            image,
            view,
            state,
            rendered: None,
            texture: None,
            edge_count: 0,
            result,
        }
    }

    /// Recompute the overlay when the sliders moved since the last render.
    fn refresh(&mut self, ctx: &egui::Context) {
        let params = self.state.params();
        if self.rendered == Some(params) {
            return;
        }
        match extract_edges(&self.image, &params) {
            Ok(edges) => {
                self.edge_count = edges.iter().filter(|&&e| e).count();
                let image = overlay_to_color_image(&self.image, &edges, self.view.as_ref());
                self.texture = Some(ctx.load_texture("edges", image, egui::TextureOptions::NEAREST));
                debug!(
                    sigma = params.sigma,
                    low = ?params.low,
                    high = ?params.high,
                    edges = self.edge_count,
                    "Edge preview updated"
                );
            }
            Err(e) => warn!("Edge preview failed: {e}"),
        }
        self.rendered = Some(params);
        self.result.set(params);
    }

    fn show_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("tuner_controls").show(ctx, |ui| {
            ui.add_space(4.0);

            let mut sigma = self.state.sigma;
            if ui
                .add(egui::Slider::new(&mut sigma, 0.0..=TUNER_SIGMA_MAX).text("sigma"))
                .changed()
            {
                self.state.set_sigma(sigma);
            }
            let mut low = self.state.low;
            if ui.add(egui::Slider::new(&mut low, 0.0..=1.0).text("low")).changed() {
                self.state.set_low(low);
            }
            let mut high = self.state.high;
            if ui.add(egui::Slider::new(&mut high, 0.0..=1.0).text("high")).changed() {
                self.state.set_high(high);
            }

            ui.horizontal(|ui| {
                if ui.button("Done").clicked() {
                    self.result.set(self.state.params());
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ui.button("Reset").clicked() {
                    self.state.reset();
                }
                ui.separator();
                ui.label(format!("{} edge pixels", self.edge_count));
            });
            ui.add_space(4.0);
        });
    }

    fn show_preview(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_gray(30));

            let Some(texture) = self.texture.as_ref() else {
                return;
            };
            let size = texture.size_vec2();
            let zoom = (rect.width() / size.x).min(rect.height() / size.y);
            let img_rect = egui::Rect::from_center_size(rect.center(), size * zoom);
            ui.painter().image(
                texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        });
    }
}

impl eframe::App for TunerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_controls(ctx);
        self.refresh(ctx);
        self.show_preview(ctx);
    }
}
