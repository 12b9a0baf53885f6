// src/gui/components/scores.rs
//
// One horizontal box plot per category, all on a shared score axis.

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::query::{BoxStats, View};

const LABEL_W: f32 = 150.0;
const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, view: &View<'_>) {
    ui.heading("Score distribution");

    let stats: Vec<(&str, Option<BoxStats>)> = view
        .scores
        .iter()
        .map(|s| (s.category.as_str(), s.box_stats()))
        .collect();

    let (lo, hi) = stats
        .iter()
        .filter_map(|(_, b)| *b)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), b| (lo.min(b.min), hi.max(b.max)));
    if !lo.is_finite() {
        ui.label("No scores for this selection.");
        return;
    }
    // flat axis when every score is equal
    let (lo, hi) = if hi - lo < 1e-9 {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    };

    let stroke = Stroke::new(1.0, ui.visuals().text_color());
    let fill = ui.visuals().selection.bg_fill.linear_multiply(0.5);

    for (category, b) in stats {
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_W, ROW_H], egui::Label::new(category).truncate());
            let w = ui.available_width().max(60.0);
            let (rect, resp) = ui.allocate_exact_size(Vec2::new(w, ROW_H), Sense::hover());
            let Some(b) = b else {
                ui.painter().text(
                    rect.left_center(),
                    egui::Align2::LEFT_CENTER,
                    "no scores",
                    egui::FontId::proportional(11.0),
                    Color32::GRAY,
                );
                return;
            };

            let x = |v: f64| rect.left() + ((v - lo) / (hi - lo)) as f32 * rect.width();
            let cy = rect.center().y;
            let painter = ui.painter();

            painter.line_segment([Pos2::new(x(b.min), cy), Pos2::new(x(b.max), cy)], stroke);
            for v in [b.min, b.max] {
                painter.line_segment([Pos2::new(x(v), cy - 4.0), Pos2::new(x(v), cy + 4.0)], stroke);
            }
            let body = Rect::from_min_max(
                Pos2::new(x(b.q1), rect.top() + 2.0),
                Pos2::new(x(b.q3).max(x(b.q1) + 1.0), rect.bottom() - 2.0),
            );
            painter.rect_filled(body, 2.0, fill);
            painter.rect_stroke(body, 2.0, stroke, StrokeKind::Inside);
            painter.line_segment(
                [Pos2::new(x(b.median), body.top()), Pos2::new(x(b.median), body.bottom())],
                Stroke::new(2.0, stroke.color),
            );

            resp.on_hover_text(format!(
                "min {:.2}\nq1 {:.2}\nmedian {:.2}\nq3 {:.2}\nmax {:.2}",
                b.min, b.q1, b.median, b.q3, b.max
            ));
        });
    }

    ui.horizontal(|ui| {
        ui.add_space(LABEL_W);
        ui.small(format!("{lo:.1}"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small(format!("{hi:.1}"));
        });
    });
}
