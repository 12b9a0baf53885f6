// src/gui/components/filters.rs
//
// Category / region selectors and the Refresh action. Writes straight into
// `app.state.gui`; the central panel rebuilds its view from that every frame.

use eframe::egui;

use crate::gui::app::App;
use crate::model::Region;
use crate::query::{CategoryFilter, RegionFilter};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Category");
        let before = app.state.gui.category.clone();
        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(app.state.gui.category.label().to_owned())
            .show_ui(ui, |ui| {
                let cur = &mut app.state.gui.category;
                ui.selectable_value(cur, CategoryFilter::All, "All");
                for c in &app.categories {
                    ui.selectable_value(cur, CategoryFilter::Only(c.clone()), c.as_str());
                }
            });
        if app.state.gui.category != before {
            logd!("UI: category {} → {}", before.label(), app.state.gui.category.label());
        }

        ui.label("Region");
        egui::ComboBox::from_id_salt("region_filter")
            .selected_text(app.state.gui.region.label())
            .show_ui(ui, |ui| {
                let cur = &mut app.state.gui.region;
                ui.selectable_value(cur, RegionFilter::All, "All");
                for r in Region::ALL {
                    ui.selectable_value(cur, RegionFilter::Only(r), r.label());
                }
            });

        ui.label("Top");
        ui.add(egui::DragValue::new(&mut app.state.gui.top_k).range(1..=50));

        ui.separator();

        let running = app.running();
        let label = if running { "Refreshing…" } else { "Refresh" };
        if ui.add_enabled(!running, egui::Button::new(label)).clicked() {
            let ctx = ui.ctx().clone();
            app.refresh(&ctx);
        }
    });
}
