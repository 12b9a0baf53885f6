// src/gui/components/regions.rs
use eframe::egui;

use crate::query::View;

/// Row count per region for the selected category; the region filter does not apply here.
pub fn draw(ui: &mut egui::Ui, view: &View<'_>) {
    ui.heading("By region");

    let max = view.regions.iter().map(|(_, n)| *n).max().unwrap_or(0);
    egui::Grid::new("region_grid").num_columns(2).striped(true).show(ui, |ui| {
        for (region, n) in &view.regions {
            ui.label(region.label());
            let frac = if max > 0 { *n as f32 / max as f32 } else { 0.0 };
            ui.add(egui::ProgressBar::new(frac).desired_width(180.0).text(n.to_string()));
            ui.end_row();
        }
    });
}
