use std::collections::BTreeSet;
use std::sync::Arc;

use crate::color::TeamColors;
use crate::data::cache::TableCache;
use crate::data::filter::visible_indices;
use crate::data::loader::{self, MIN_GAMES_FLOOR};
use crate::data::model::PlayerTable;
use crate::ui::charts::ChartKind;

/// Upper bound of the minimum-games slider. The lower bound is the loader
/// floor, so the slider can only tighten what the loader already enforced.
pub const MIN_GAMES_CEIL: u32 = 100;

/// The slider advances in ten-game notches.
pub const MIN_GAMES_STEP: u32 = 10;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Cached table (empty until the first successful load).
    pub cache: TableCache,

    /// Minimum games played, in `[MIN_GAMES_FLOOR, MIN_GAMES_CEIL]`.
    pub min_games: u32,

    /// Teams currently selected in the sidebar.
    pub selected_teams: BTreeSet<String>,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Which chart the central panel shows.
    pub chart: ChartKind,

    /// Team → colour mapping for the scatter/box charts and swatches.
    pub team_colors: Option<TeamColors>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cache: TableCache::default(),
            min_games: MIN_GAMES_FLOOR,
            selected_teams: BTreeSet::new(),
            visible_indices: Vec::new(),
            chart: ChartKind::ScatterMinutesVsPoints,
            team_colors: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Initial load. A failure leaves the dashboard empty with the error in
    /// the status line; filters keep their defaults.
    pub fn load_table(&mut self) {
        match self.cache.get_or_load(loader::load) {
            Ok(table) => self.on_table_loaded(&table),
            Err(e) => {
                log::error!("initial load failed: {e}");
                self.status_message = Some(format!("Load failed: {e}"));
            }
        }
    }

    /// Refetch the source. The cache swaps only on success, so a failed
    /// reload keeps the current table and view intact.
    pub fn reload_table(&mut self) {
        match self.cache.refresh(loader::load) {
            Ok(table) => self.on_table_loaded(&table),
            Err(e) => {
                log::error!("reload failed: {e}");
                self.status_message = Some(format!("Reload failed: {e}"));
            }
        }
    }

    /// Ingest a freshly loaded table: select every team, rebuild colours,
    /// recompute the view.
    fn on_table_loaded(&mut self, table: &Arc<PlayerTable>) {
        self.selected_teams = table.teams.clone();
        self.team_colors = Some(TeamColors::new(&table.teams));
        self.status_message = None;
        self.refilter();
    }

    /// Manual cache invalidation: drop the table and everything derived
    /// from it. The next reload starts from scratch.
    pub fn discard_table(&mut self) {
        self.cache.invalidate();
        self.selected_teams.clear();
        self.team_colors = None;
        self.status_message = Some("Cached table discarded — reload to fetch again.".to_string());
        self.refilter();
    }

    /// Recompute `visible_indices` after any filter change.
    pub fn refilter(&mut self) {
        if let Some(table) = self.cache.table() {
            self.visible_indices = visible_indices(&table, self.min_games, &self.selected_teams);
        } else {
            self.visible_indices.clear();
        }
    }

    /// Toggle a single team in the sidebar multiselect.
    pub fn toggle_team(&mut self, team: &str) {
        if !self.selected_teams.remove(team) {
            self.selected_teams.insert(team.to_string());
        }
        self.refilter();
    }

    /// Select every team present in the table.
    pub fn select_all_teams(&mut self) {
        if let Some(table) = self.cache.table() {
            self.selected_teams = table.teams.clone();
            self.refilter();
        }
    }

    /// Deselect every team. The resulting view is empty by design.
    pub fn select_no_teams(&mut self) {
        self.selected_teams.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        let table = PlayerTable::from_records(vec![
            record(1, "A1", "ATL", 60, 30.0, 20.0),
            record(2, "B1", "BKN", 70, 34.0, 25.0),
            record(3, "A2", "ATL", 55, 22.0, 11.0),
        ]);
        let table = state.cache.get_or_load(|| Ok(table)).unwrap();
        state.on_table_loaded(&table);
        state
    }

    #[test]
    fn loading_selects_all_teams_and_shows_everything() {
        let state = loaded_state();
        assert_eq!(state.selected_teams.len(), 2);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert!(state.status_message.is_none());
        assert!(state.team_colors.is_some());
    }

    #[test]
    fn tightening_the_slider_shrinks_the_view() {
        let mut state = loaded_state();
        state.min_games = 60;
        state.refilter();
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn toggling_a_team_out_and_back_restores_the_view() {
        let mut state = loaded_state();
        state.toggle_team("ATL");
        assert_eq!(state.visible_indices, vec![1]);
        state.toggle_team("ATL");
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn select_none_empties_the_view() {
        let mut state = loaded_state();
        state.select_no_teams();
        assert!(state.visible_indices.is_empty());
        state.select_all_teams();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn discarding_clears_everything_derived() {
        let mut state = loaded_state();
        state.discard_table();
        assert!(state.cache.table().is_none());
        assert!(state.selected_teams.is_empty());
        assert!(state.team_colors.is_none());
        assert!(state.visible_indices.is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn refilter_without_a_table_clears_the_view() {
        let mut state = AppState::default();
        state.visible_indices = vec![9];
        state.refilter();
        assert!(state.visible_indices.is_empty());
    }
}
