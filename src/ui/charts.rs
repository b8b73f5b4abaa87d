use std::collections::BTreeMap;

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, Points};

use crate::color::{diverging, TeamColors};
use crate::data::model::PlayerRecord;
use crate::data::stats::{self, CORRELATION_LABELS};
use crate::state::AppState;

/// Bin count for both histograms.
const HISTOGRAM_BINS: usize = 30;

const MINUTES_COLOR: Color32 = Color32::from_rgb(0x64, 0x95, 0xED);
const POINTS_COLOR: Color32 = Color32::from_rgb(0x3C, 0xB3, 0x71);

// ---------------------------------------------------------------------------
// Chart selection
// ---------------------------------------------------------------------------

/// The closed set of charts the dashboard can draw. Dispatch is an
/// exhaustive `match`; adding a variant forces every arm to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    ScatterMinutesVsPoints,
    MinutesHistogram,
    PointsHistogram,
    PointsByTeamBoxPlot,
    MinutesPointsHeatmap,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::ScatterMinutesVsPoints,
        ChartKind::MinutesHistogram,
        ChartKind::PointsHistogram,
        ChartKind::PointsByTeamBoxPlot,
        ChartKind::MinutesPointsHeatmap,
    ];

    /// Combo-box label.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::ScatterMinutesVsPoints => "Scatter: Minutes vs Points Per Game",
            ChartKind::MinutesHistogram => "Histogram: Minutes Per Game",
            ChartKind::PointsHistogram => "Histogram: Points Per Game",
            ChartKind::PointsByTeamBoxPlot => "Box Plot: Points Per Game by Team",
            ChartKind::MinutesPointsHeatmap => "Heatmap: Minutes/Points Correlation",
        }
    }
}

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the selected chart for the current view.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    let Some(table) = state.cache.table() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data loaded — check the status line and reload.");
        });
        return;
    };

    let view: Vec<&PlayerRecord> = state
        .visible_indices
        .iter()
        .map(|&i| &table.records[i])
        .collect();

    // Empty view: surface the notice inline, skip rendering entirely.
    if view.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No players match the current filters.");
        });
        return;
    }

    match state.chart {
        ChartKind::ScatterMinutesVsPoints => scatter(ui, &view, state.team_colors.as_ref()),
        ChartKind::MinutesHistogram => histogram_chart(
            ui,
            "minutes_hist",
            "Minutes Per Game",
            MINUTES_COLOR,
            view.iter().map(|r| r.minutes_per_game).collect(),
        ),
        ChartKind::PointsHistogram => histogram_chart(
            ui,
            "points_hist",
            "Points Per Game",
            POINTS_COLOR,
            view.iter().map(|r| r.points_per_game).collect(),
        ),
        ChartKind::PointsByTeamBoxPlot => box_plot(ui, &view, state.team_colors.as_ref()),
        ChartKind::MinutesPointsHeatmap => correlation_heatmap(ui, &view),
    }
}

fn team_color(colors: Option<&TeamColors>, team: &str) -> Color32 {
    colors.map(|c| c.color_for(team)).unwrap_or(Color32::GRAY)
}

// ---------------------------------------------------------------------------
// Scatter: minutes vs points, one series per team
// ---------------------------------------------------------------------------

fn scatter(ui: &mut Ui, view: &[&PlayerRecord], colors: Option<&TeamColors>) {
    let mut by_team: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for r in view {
        by_team
            .entry(r.team.as_str())
            .or_default()
            .push([r.minutes_per_game, r.points_per_game]);
    }

    Plot::new("scatter_minutes_points")
        .legend(Legend::default())
        .x_axis_label("Minutes Per Game")
        .y_axis_label("Points Per Game")
        .show(ui, |plot_ui| {
            for (team, points) in by_team {
                plot_ui.points(
                    Points::new(points)
                        .name(team)
                        .color(team_color(colors, team))
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Histograms
// ---------------------------------------------------------------------------

fn histogram_chart(ui: &mut Ui, id: &str, axis: &str, color: Color32, values: Vec<f64>) {
    let Some(hist) = stats::histogram(&values, HISTOGRAM_BINS) else {
        return;
    };

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bar::new(hist.center(i), count as f64).width(hist.bin_width))
        .collect();

    Plot::new(id.to_string())
        .x_axis_label(axis.to_string())
        .y_axis_label("Players")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color).name(axis));
        });
}

// ---------------------------------------------------------------------------
// Box plot: points per game grouped by team
// ---------------------------------------------------------------------------

fn box_plot(ui: &mut Ui, view: &[&PlayerRecord], colors: Option<&TeamColors>) {
    let mut by_team: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in view {
        by_team
            .entry(r.team.as_str())
            .or_default()
            .push(r.points_per_game);
    }

    Plot::new("points_by_team_box")
        .legend(Legend::default())
        .y_axis_label("Points Per Game")
        .show_x(false)
        .show(ui, |plot_ui| {
            for (x, (team, values)) in by_team.into_iter().enumerate() {
                let Some(b) = stats::box_stats(&values) else {
                    continue;
                };
                let color = team_color(colors, team);
                let spread =
                    BoxSpread::new(b.low_whisker, b.q1, b.median, b.q3, b.high_whisker);
                let elem = BoxElem::new(x as f64, spread)
                    .box_width(0.6)
                    .fill(color.gamma_multiply(0.35))
                    .stroke(Stroke::new(1.5, color));
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(team));

                if !b.outliers.is_empty() {
                    let pts: Vec<[f64; 2]> =
                        b.outliers.iter().map(|&v| [x as f64, v]).collect();
                    plot_ui.points(Points::new(pts).color(color).radius(2.0));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap (2×2, painter-drawn)
// ---------------------------------------------------------------------------

fn correlation_heatmap(ui: &mut Ui, view: &[&PlayerRecord]) {
    let matrix = stats::minutes_points_correlation(view);
    let cell = (ui.available_width() / 3.0).clamp(80.0, 180.0);

    ui.add_space(8.0);
    egui::Grid::new("corr_heatmap")
        .spacing([6.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for label in CORRELATION_LABELS {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(RichText::new(label).strong());
                });
            }
            ui.end_row();

            for (i, row_label) in CORRELATION_LABELS.iter().enumerate() {
                ui.label(RichText::new(*row_label).strong());
                for j in 0..CORRELATION_LABELS.len() {
                    heatmap_cell(ui, cell, matrix.cells[i][j]);
                }
                ui.end_row();
            }
        });

    if matrix.has_undefined() {
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Correlation undefined for shaded cells \
                 (fewer than two players, or no variation in a column).",
            )
            .color(ui.visuals().warn_fg_color),
        );
    }
}

fn heatmap_cell(ui: &mut Ui, size: f32, value: Option<f64>) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let (fill, text) = match value {
        Some(r) => (diverging(r), format!("{r:.2}")),
        None => (Color32::from_gray(70), "n/a".to_string()),
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, fill);
    let text_color = if value.is_some() {
        Color32::BLACK
    } else {
        Color32::WHITE
    };
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(16.0),
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_label() {
        let labels: std::collections::HashSet<_> =
            ChartKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), ChartKind::ALL.len());
    }
}
