use eframe::egui::{Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{PlayerRecord, COLUMN_LABELS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered data grid
// ---------------------------------------------------------------------------

/// Draw the filtered table. Purely a view over the cached table and the
/// current visible indices.
pub fn player_grid(ui: &mut Ui, state: &AppState) {
    let Some(table) = state.cache.table() else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.label(
        RichText::new(format!(
            "Players with at least {} games from selected teams",
            state.min_games
        ))
        .strong(),
    );
    ui.add_space(4.0);

    if state.visible_indices.is_empty() {
        ui.label("No players match the current filters.");
        return;
    }

    let view: Vec<&PlayerRecord> = state
        .visible_indices
        .iter()
        .map(|&i| &table.records[i])
        .collect();

    // Rank and Team stay narrow, Player gets the slack, numerics align right.
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(44.0))
        .column(Column::remainder().at_least(140.0).clip(true))
        .column(Column::auto().at_least(52.0))
        .columns(Column::auto().at_least(96.0), 3)
        .header(22.0, |mut header| {
            for label in COLUMN_LABELS {
                header.col(|ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, view.len(), |mut row| {
                let r = view[row.index()];
                row.col(|ui| {
                    ui.label(r.rank.to_string());
                });
                row.col(|ui| {
                    ui.label(&r.player);
                });
                row.col(|ui| {
                    ui.label(&r.team);
                });
                numeric_cell(&mut row, r.games_played.to_string());
                numeric_cell(&mut row, format!("{:.1}", r.minutes_per_game));
                numeric_cell(&mut row, format!("{:.1}", r.points_per_game));
            });
        });
}

fn numeric_cell(row: &mut egui_extras::TableRow<'_, '_>, text: String) {
    row.col(|ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            ui.label(text);
        });
    });
}
