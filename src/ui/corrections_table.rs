use egui_extras::{Column, TableBuilder};

use crate::state::review_session::{format_value, ReviewSession};

/// Table of modified points: 1-based position, original value, the staged
/// text for the updated value, and a per-row reset.
///
/// `modified` is the diff view computed by the caller for this frame; edits
/// made here show up in the next frame's diff.
pub fn show_corrections_table(
    session: &mut ReviewSession,
    modified: &[usize],
    ui: &mut egui::Ui,
) {
    ui.label(egui::RichText::new("Corrections").strong());
    ui.add_space(2.0);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .max_scroll_height(160.0)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.label(egui::RichText::new("#").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Original").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Updated").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Action").strong());
            });
        })
        .body(|mut body| {
            for &index in modified {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{}", index + 1));
                    });
                    row.col(|ui| {
                        ui.label(format_value(session.baseline()[index]));
                    });
                    row.col(|ui| {
                        let mut text = session.staging_text(index).to_string();
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut text).desired_width(110.0),
                        );
                        if response.changed() {
                            session.apply_text_input(index, &text);
                        }
                    });
                    row.col(|ui| {
                        if ui.small_button("Reset").clicked() {
                            session.reset_index(index);
                        }
                    });
                });
            }
        });
}
