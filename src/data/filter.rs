use std::collections::BTreeSet;

use super::model::PlayerTable;

// ---------------------------------------------------------------------------
// View derivation
// ---------------------------------------------------------------------------

/// Indices of records passing the sidebar filters, in source order.
///
/// A record passes when `games_played >= min_games` and its team is in
/// `teams`. An empty team set selects nothing — deselecting every team
/// means "show no one", not "show everyone". Pure; the table is never
/// mutated.
pub fn visible_indices(
    table: &PlayerTable,
    min_games: u32,
    teams: &BTreeSet<String>,
) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.games_played >= min_games && teams.contains(&r.team))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::MIN_GAMES_FLOOR;
    use crate::data::model::tests::record;

    fn sample_table() -> PlayerTable {
        // Already normalized: the 40-game row never survives the loader.
        PlayerTable::from_records(vec![
            record(1, "A1", "A", 60, 32.0, 24.0),
            record(2, "B1", "B", 82, 35.0, 28.5),
            record(3, "A2", "A", 51, 18.0, 7.2),
        ])
    }

    fn teams(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn empty_team_set_selects_nothing() {
        let table = sample_table();
        assert!(visible_indices(&table, MIN_GAMES_FLOOR, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn empty_table_yields_empty_view() {
        let table = PlayerTable::from_records(Vec::new());
        assert!(visible_indices(&table, MIN_GAMES_FLOOR, &teams(&["A"])).is_empty());
    }

    #[test]
    fn floor_and_all_teams_is_the_identity() {
        let table = sample_table();
        let view = visible_indices(&table, MIN_GAMES_FLOOR, &table.teams);
        assert_eq!(view, vec![0, 1, 2]);
    }

    #[test]
    fn min_games_refines_the_floor() {
        let table = sample_table();
        assert_eq!(visible_indices(&table, 60, &table.teams), vec![0, 1]);
        assert_eq!(visible_indices(&table, 90, &table.teams), Vec::<usize>::new());
    }

    #[test]
    fn team_subset_keeps_source_order() {
        let table = sample_table();
        assert_eq!(visible_indices(&table, MIN_GAMES_FLOOR, &teams(&["A"])), vec![0, 2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = sample_table();
        let selection = teams(&["A", "B"]);
        let once = visible_indices(&table, 55, &selection);

        let refiltered = PlayerTable::from_records(
            once.iter().map(|&i| table.records[i].clone()).collect(),
        );
        let twice = visible_indices(&refiltered, 55, &selection);
        assert_eq!(twice.len(), once.len());
        assert!(twice
            .iter()
            .zip(&once)
            .all(|(&j, &i)| refiltered.records[j] == table.records[i]));
    }

    #[test]
    fn loader_floor_scenario() {
        // Spec scenario: the 40-game row was already excluded by the loader,
        // so filtering at the floor with both teams returns the one survivor.
        let table = PlayerTable::from_records(vec![record(1, "P1", "A", 60, 30.0, 20.0)]);
        let view = visible_indices(&table, MIN_GAMES_FLOOR, &teams(&["A", "B"]));
        assert_eq!(view, vec![0]);
    }
}
