use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::data::loader::{self, TaskData};
use crate::data::submission::Submission;
use crate::state::app_state::{AppState, VERSION};
use crate::state::review_session::ReviewSession;
use crate::ui::review_panel::{self, ReviewAction, ReviewPanelState};

/// Pending async task-file load result.
struct PendingLoad {
    result: Arc<Mutex<Option<Result<TaskData, String>>>>,
}

/// The main CurveCheck application.
pub struct CurveCheckApp {
    pub state: AppState,
    /// Frame-to-frame UI state of the review panel (drag, hover).
    panel: ReviewPanelState,
    /// An error message to display in the footer until dismissed.
    pub error_message: Option<String>,
    /// Transient confirmation shown after a submission is written.
    pub status_message: Option<String>,
    /// Whether to show the About window (hidden menu).
    pub show_about: bool,
    /// Async task-file load in progress.
    pending_load: Option<PendingLoad>,
}

impl CurveCheckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        // --- Global UI style ---
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(21.0),
        );
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);
        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        Self {
            state,
            panel: ReviewPanelState::default(),
            error_message: None,
            status_message: None,
            show_about: false,
            pending_load: None,
        }
    }

    /// Open a native file dialog and load the chosen task file.
    fn open_task_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Task Files", &["json", "csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.load_task(&path);
        }
    }

    /// Parse a task file on a worker thread so the UI stays responsive.
    fn load_task(&mut self, path: &std::path::Path) {
        let path_buf = path.to_path_buf();
        let result: Arc<Mutex<Option<Result<TaskData, String>>>> =
            Arc::new(Mutex::new(None));
        let result_clone = Arc::clone(&result);

        std::thread::spawn(move || {
            let loaded = loader::load_task(&path_buf);
            *result_clone.lock().unwrap() = Some(loaded);
        });

        self.pending_load = Some(PendingLoad { result });
    }

    /// Write the submission payload to a user-chosen path.
    fn submit_session(&mut self) {
        let Some(session) = self.state.session.as_ref() else {
            return;
        };
        let submission = Submission::from_session(session);
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(submission.default_file_name())
            .add_filter("Submission", &["json"])
            .save_file()
        {
            match submission.write_to(&path) {
                Ok(()) => {
                    tracing::info!("Submission written to {:?}", path);
                    self.status_message = Some(format!(
                        "Submitted {} points ({} corrected) to {}",
                        submission.values.len(),
                        submission.corrected_indices.len(),
                        path.display()
                    ));
                }
                Err(e) => {
                    tracing::error!("Failed to write submission: {e}");
                    self.error_message = Some(e);
                }
            }
        }
    }
}

impl eframe::App for CurveCheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.state.theme.visuals());

        // ------------------------------------------------------------------
        // 1. Handle dropped task files
        // ------------------------------------------------------------------
        let mut dropped_path: Option<std::path::PathBuf> = None;
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    let ext = path
                        .extension()
                        .and_then(|e| e.to_str())
                        .map(|e| e.to_lowercase())
                        .unwrap_or_default();
                    if ext == "json" || ext == "csv" {
                        dropped_path = Some(path.clone());
                    }
                }
            }
        });
        if let Some(path) = dropped_path {
            self.load_task(&path);
        }

        // ------------------------------------------------------------------
        // 2. Header panel
        // ------------------------------------------------------------------
        let mut open_task = false;
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.visuals_mut().override_text_color =
                        Some(ui.visuals().strong_text_color());
                    let heading_response = ui.heading("CurveCheck");
                    ui.visuals_mut().override_text_color = None;
                    heading_response.context_menu(|ui| {
                        if ui.button("About CurveCheck").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });

                    ui.separator();

                    if ui.button("Open Task").clicked() {
                        open_task = true;
                    }

                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            let theme_label = match self.state.theme {
                                crate::state::theme::Theme::Dark => "Light Mode",
                                crate::state::theme::Theme::Light => "Dark Mode",
                            };
                            if ui.button(theme_label).clicked() {
                                self.state.theme = self.state.theme.toggle();
                            }
                            ui.separator();
                            ui.small(format!("v{VERSION}"));
                        },
                    );
                });
            });

        if open_task {
            self.open_task_dialog();
        }

        // ------------------------------------------------------------------
        // 3. Footer panel
        // ------------------------------------------------------------------
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match &self.state.session {
                        Some(session) => {
                            let modified = session.modified_indices().len();
                            ui.label(egui::RichText::new(session.task_name()).strong());
                            ui.separator();
                            ui.label(format!("{} points", session.len()));
                            ui.separator();
                            ui.label(if modified == 0 {
                                "no corrections".to_string()
                            } else {
                                format!("{modified} corrected")
                            });
                        }
                        None => {
                            ui.label(egui::RichText::new("No task loaded").weak());
                        }
                    }

                    if let Some(msg) = self.status_message.clone() {
                        ui.separator();
                        ui.label(egui::RichText::new(msg).weak());
                    }

                    if let Some(msg) = &self.error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::from_rgb(255, 80, 80), msg);
                        if ui.small_button("dismiss").clicked() {
                            self.error_message = None;
                        }
                    }
                });
            });

        // ------------------------------------------------------------------
        // 4. Central panel
        // ------------------------------------------------------------------
        let mut action = ReviewAction::None;
        let theme = self.state.theme;
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.session.as_mut() {
                Some(session) => {
                    action = review_panel::show_review_panel(
                        session,
                        &mut self.panel,
                        ui,
                        &theme,
                    );
                }
                None => {
                    ui.add_space(80.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Welcome to CurveCheck");
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new(
                                "Click \"Open Task\" above, or drag-and-drop a task file (JSON / CSV) to start reviewing.",
                            )
                            .weak(),
                        );
                    });
                }
            }
        });

        // ------------------------------------------------------------------
        // 5. Process review-panel actions
        // ------------------------------------------------------------------
        match action {
            ReviewAction::None => {}
            ReviewAction::Submit => {
                self.submit_session();
            }
            ReviewAction::Discard => {
                if let Some(session) = self.state.session.as_mut() {
                    session.discard_all();
                }
                self.panel.reset();
            }
        }

        // ------------------------------------------------------------------
        // 6. Poll async task load
        // ------------------------------------------------------------------
        if let Some(ref pending) = self.pending_load {
            let mut lock = pending.result.lock().unwrap();
            if let Some(result) = lock.take() {
                match result {
                    Ok(task) => {
                        tracing::info!(
                            "Loaded task {:?} with {} points",
                            task.name,
                            task.values.len()
                        );
                        self.state
                            .open_session(ReviewSession::new(task.name, task.values));
                        self.panel.reset();
                        self.status_message = None;
                    }
                    Err(e) => {
                        tracing::error!("Failed to load task: {e}");
                        self.error_message = Some(format!("Failed to load task: {e}"));
                    }
                }
                drop(lock);
                self.pending_load = None;
            }
        }

        if self.pending_load.is_some() {
            egui::Window::new("Loading")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading task...");
                    });
                });
            ctx.request_repaint();
        }

        // ------------------------------------------------------------------
        // 7. About window (hidden menu)
        // ------------------------------------------------------------------
        if self.show_about {
            egui::Window::new("About CurveCheck")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.heading("CurveCheck");
                    ui.label(format!("Version: {VERSION}"));
                    ui.add_space(4.0);
                    ui.label("A review tool for numeric-series correction tasks.");
                    ui.add_space(10.0);
                    ui.label("Features:");
                    ui.label("  \u{2022} Drag chart points to correct values");
                    ui.label("  \u{2022} Typed corrections with per-point reset");
                    ui.label("  \u{2022} Edit tracking against the original series");
                    ui.label("  \u{2022} JSON and CSV task files");
                    ui.add_space(10.0);
                    ui.label("Right-click the title for this menu.");
                });
        }
    }
}
