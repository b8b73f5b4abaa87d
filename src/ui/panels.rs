use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export;
use crate::data::loader::MIN_GAMES_FLOOR;
use crate::data::model::PlayerRecord;
use crate::state::{AppState, MIN_GAMES_CEIL, MIN_GAMES_STEP};
use crate::ui::charts::ChartKind;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(table) = state.cache.table() else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.strong("Minimum games played");
    ui.add(
        egui::Slider::new(&mut state.min_games, MIN_GAMES_FLOOR..=MIN_GAMES_CEIL)
            .step_by(MIN_GAMES_STEP as f64),
    );
    ui.separator();

    ui.strong("Visualization");
    egui::ComboBox::from_id_salt("chart_kind")
        .selected_text(state.chart.label())
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            for kind in ChartKind::ALL {
                if ui
                    .selectable_label(state.chart == kind, kind.label())
                    .clicked()
                {
                    state.chart = kind;
                }
            }
        });
    ui.separator();

    // ---- Team multiselect ----
    let teams = table.teams.clone();
    let header_text = format!("Teams  ({}/{})", state.selected_teams.len(), teams.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("teams")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_teams();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_teams();
                }
            });

            ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui: &mut Ui| {
                    for team in &teams {
                        let mut text = RichText::new(team);
                        if let Some(colors) = &state.team_colors {
                            text = text.color(colors.color_for(team));
                        }

                        let mut checked = state.selected_teams.contains(team);
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_team(team);
                        }
                    }
                });
        });

    // Recompute visible indices after any slider/checkbox changes.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export CSV…").clicked() {
                export_view_dialog(state, ExportFormat::Csv);
                ui.close_menu();
            }
            if ui.button("Export JSON…").clicked() {
                export_view_dialog(state, ExportFormat::Json);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Discard cached data").clicked() {
                state.discard_table();
                ui.close_menu();
            }
        });

        if ui.button("Reload").clicked() {
            state.reload_table();
        }

        ui.separator();

        if let Some(table) = state.cache.table() {
            ui.label(format!(
                "{} players loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Export dialogs
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn ext(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Ask for a destination and write the current filtered view there.
fn export_view_dialog(state: &mut AppState, format: ExportFormat) {
    let Some(table) = state.cache.table() else {
        state.status_message = Some("Nothing to export (no dataset loaded).".to_string());
        return;
    };
    if state.visible_indices.is_empty() {
        state.status_message = Some("Nothing to export (no players match).".to_string());
        return;
    }

    let ext = format.ext();
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export filtered players")
        .set_file_name(format!("players.{ext}"))
        .add_filter(ext.to_uppercase(), &[ext])
        .save_file()
    else {
        return;
    };

    let view: Vec<&PlayerRecord> = state
        .visible_indices
        .iter()
        .map(|&i| &table.records[i])
        .collect();

    match write_view(&path, format, &view) {
        Ok(()) => {
            log::info!("exported {} players to {}", view.len(), path.display());
            state.status_message =
                Some(format!("Exported {} players to {}", view.len(), path.display()));
        }
        Err(e) => {
            log::error!("export failed: {e:#}");
            state.status_message = Some(format!("Export failed: {e:#}"));
        }
    }
}

fn write_view(path: &Path, format: ExportFormat, view: &[&PlayerRecord]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => export::write_csv(writer, view),
        ExportFormat::Json => export::write_json(writer, view),
    }
}
