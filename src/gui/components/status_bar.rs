// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.running() {
            ui.spinner();
        }
        ui.label(app.status_text());
    });

    if !app.failures.is_empty() {
        egui::CollapsingHeader::new(format!("{} failed categories", app.failures.len()))
            .id_salt("failures")
            .show(ui, |ui| {
                for f in &app.failures {
                    ui.label(f);
                }
            });
    }

    if !app.gaps.is_empty() {
        egui::CollapsingHeader::new(format!("{} institutes without a state", app.gaps.len()))
            .id_salt("gaps")
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("gaps_scroll")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        for name in app.gaps.names() {
                            ui.label(name);
                        }
                    });
            });
    }
}
