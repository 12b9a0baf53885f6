// src/gui/components/top_table.rs
//
// Top-k rows by score, with a bar per row scaled to the best score shown.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::query::View;

pub fn draw(ui: &mut egui::Ui, view: &View<'_>) {
    ui.heading(format!("Top {} by score", view.top.len()));

    if view.top.is_empty() {
        ui.label("No rows for this selection.");
        return;
    }

    let best = view
        .top
        .iter()
        .filter_map(|e| e.score)
        .fold(0.0_f64, f64::max);

    TableBuilder::new(ui)
        .id_salt("top_table")
        .striped(true)
        .vscroll(false)
        .column(Column::exact(40.0))
        .column(Column::initial(320.0).resizable(true).clip(true).at_least(120.0))
        .column(Column::initial(140.0).resizable(true).clip(true))
        .column(Column::initial(130.0).resizable(true).clip(true))
        .column(Column::initial(90.0).resizable(true))
        .column(Column::remainder().at_least(120.0))
        .header(22.0, |mut header| {
            for h in ["Rank", "Name", "Category", "State", "Region", "Score"] {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|mut body| {
            for e in &view.top {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(e.rank.to_string());
                        });
                    });
                    row.col(|ui| {
                        ui.label(&e.name);
                    });
                    row.col(|ui| {
                        ui.label(&e.category);
                    });
                    row.col(|ui| {
                        ui.label(e.state.as_deref().unwrap_or("-"));
                    });
                    row.col(|ui| {
                        ui.label(e.region.label());
                    });
                    row.col(|ui| match e.score {
                        Some(score) => {
                            let frac = if best > 0.0 {
                                (score / best) as f32
                            } else {
                                0.0
                            };
                            ui.add(
                                egui::ProgressBar::new(frac.clamp(0.0, 1.0))
                                    .text(format!("{score:.2}")),
                            );
                        }
                        None => {
                            ui.label("-");
                        }
                    });
                });
            }
        });
}
