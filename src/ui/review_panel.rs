use egui_plot::{Corner, Legend, Line, Plot, PlotPoint, PlotPoints, Points};

use crate::processing::statistics::EditStats;
use crate::state::review_session::ReviewSession;
use crate::state::theme::Theme;
use crate::ui::corrections_table;
use crate::ui::point_drag::{self, PointDrag, HIT_RADIUS};

/// Actions the review panel can request from the parent.
pub enum ReviewAction {
    None,
    Submit,
    Discard,
}

/// Frame-to-frame UI state of the review panel. Kept outside the session so
/// the edit state stays free of presentation concerns.
#[derive(Debug, Default)]
pub struct ReviewPanelState {
    pub drag: PointDrag,
    /// Updated-series point under the pointer last frame. Used to suppress
    /// plot panning before the drag actually starts.
    pub hovered_point: Option<usize>,
}

impl ReviewPanelState {
    /// Forget any in-flight interaction, e.g. when a new task is opened.
    pub fn reset(&mut self) {
        self.drag.cancel();
        self.hovered_point = None;
    }
}

/// Render the review screen for the current session: the chart, the edit
/// summary, the corrections table and the submit/discard controls.
pub fn show_review_panel(
    session: &mut ReviewSession,
    panel: &mut ReviewPanelState,
    ui: &mut egui::Ui,
    theme: &Theme,
) -> ReviewAction {
    let mut action = ReviewAction::None;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(session.task_name());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Drag points on the chart or type corrections below")
                            .weak(),
                    );
                });
            });
            ui.add_space(4.0);

            let plot_height = (ui.available_height() - 260.0).max(280.0);
            show_chart(session, panel, ui, theme, plot_height);

            if let Some(stats) = EditStats::compute(session.baseline(), session.working()) {
                ui.add_space(6.0);
                ui.label(egui::RichText::new(stats.summary()).weak());
            }

            let modified = session.modified_indices();
            if !modified.is_empty() {
                ui.add_space(6.0);
                corrections_table::show_corrections_table(session, &modified, ui);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let submit_btn = egui::Button::new(egui::RichText::new("Submit").strong())
                    .min_size(egui::vec2(110.0, 30.0));
                if ui.add(submit_btn).on_hover_text("Hand in the updated series").clicked() {
                    action = ReviewAction::Submit;
                }

                let discard_btn = egui::Button::new("Discard Changes")
                    .min_size(egui::vec2(130.0, 30.0));
                if ui
                    .add_enabled(!modified.is_empty(), discard_btn)
                    .on_hover_text("Restore every point to the original value")
                    .clicked()
                {
                    action = ReviewAction::Discard;
                }
            });
        });

    action
}

/// Draw the Original/Updated chart and translate pointer drags on the
/// Updated series into session edits.
fn show_chart(
    session: &mut ReviewSession,
    panel: &mut ReviewPanelState,
    ui: &mut egui::Ui,
    theme: &Theme,
    height: f32,
) {
    // x is the 1-based point position; the dragged point shows its preview
    // value instead of the committed one.
    let original: Vec<[f64; 2]> = session
        .baseline()
        .iter()
        .enumerate()
        .map(|(i, &y)| [(i + 1) as f64, y])
        .collect();
    let updated: Vec<[f64; 2]> = session
        .working()
        .iter()
        .enumerate()
        .map(|(i, &y)| [(i + 1) as f64, panel.drag.preview(i).unwrap_or(y)])
        .collect();

    // Panning stays off while a point is grabbed or grabbable, so the drag
    // moves the point rather than the view.
    let pan_enabled = !panel.drag.is_active() && panel.hovered_point.is_none();
    let highlight = panel.drag.active_index().or(panel.hovered_point);

    let updated_color = theme.updated_color();
    let original_color = theme.original_color();
    let highlight_color = theme.drag_highlight_color();

    let plot_response = Plot::new("review_chart")
        .height(height)
        .legend(Legend::default().position(Corner::LeftTop))
        .allow_drag(pan_enabled)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark, _range| {
            let v = mark.value;
            if v >= 0.5 && (v - v.round()).abs() < 1e-6 {
                format!("{}", v.round() as i64)
            } else {
                String::new()
            }
        })
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name} #{}: {:.3}", value.x.round() as i64, value.y)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(original.clone()))
                    .color(original_color)
                    .width(2.0)
                    .name("Original"),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(original.clone()))
                    .color(original_color)
                    .radius(2.5),
            );
            plot_ui.line(
                Line::new(PlotPoints::from(updated.clone()))
                    .color(updated_color)
                    .width(2.0)
                    .name("Updated"),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(updated.clone()))
                    .color(updated_color)
                    .radius(4.0),
            );
            if let Some(i) = highlight {
                if let Some(p) = updated.get(i) {
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![*p]))
                            .color(highlight_color)
                            .radius(6.0),
                    );
                }
            }
        });

    let response = &plot_response.response;
    let transform = &plot_response.transform;

    let screen_points: Vec<egui::Pos2> = updated
        .iter()
        .map(|p| transform.position_from_point(&PlotPoint::new(p[0], p[1])))
        .collect();

    panel.hovered_point = if panel.drag.is_active() {
        panel.drag.active_index()
    } else {
        response
            .hover_pos()
            .and_then(|pos| point_drag::nearest_point_within(&screen_points, pos, HIT_RADIUS))
    };

    if panel.drag.is_active() {
        if let Some(pos) = response.interact_pointer_pos() {
            panel.drag.update_value(transform.value_from_position(pos).y);
        }
        if response.drag_stopped() {
            if let Some((index, value)) = panel.drag.take_commit() {
                session.apply_drag_value(index, value);
            }
        }
    } else if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some(index) =
                point_drag::nearest_point_within(&screen_points, pos, HIT_RADIUS)
            {
                panel.drag.begin(index, session.working()[index]);
            }
        }
    }
}
