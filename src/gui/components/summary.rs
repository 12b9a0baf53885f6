// src/gui/components/summary.rs
use eframe::egui::{self, RichText};

use crate::query::View;

pub fn draw(ui: &mut egui::Ui, view: &View<'_>) {
    ui.horizontal(|ui| {
        card(ui, "Institutes", view.summary.count.to_string());
        card(ui, "Average score", format!("{:.2}", view.summary.avg_score));
        card(ui, "Rows", view.rows.len().to_string());
    });
}

fn card(ui: &mut egui::Ui, title: &str, value: String) {
    ui.group(|ui| {
        ui.set_min_width(140.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).small());
            ui.label(RichText::new(value).heading().strong());
        });
    });
}
