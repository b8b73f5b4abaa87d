use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the source table
// ---------------------------------------------------------------------------

/// Canonical column labels, in table order. Shared by the data grid and the
/// CSV export so every surface shows the same names.
pub const COLUMN_LABELS: [&str; 6] = [
    "Rank",
    "Player",
    "Team",
    "Games Played",
    "Minutes Per Game",
    "Points Per Game",
];

/// One player's per-game statistics for a season.
///
/// `rank` is the source row order, not globally meaningful; `player` is a
/// display name with no uniqueness guarantee (traded players repeat).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(rename = "Player")]
    pub player: String,
    /// Short team code, the grouping/filter key.
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Games Played")]
    pub games_played: u32,
    #[serde(rename = "Minutes Per Game")]
    pub minutes_per_game: f64,
    #[serde(rename = "Points Per Game")]
    pub points_per_game: f64,
}

// ---------------------------------------------------------------------------
// PlayerTable – the complete normalized table
// ---------------------------------------------------------------------------

/// The full normalized table with a pre-computed team index.
///
/// Immutable once built: interactions derive filtered views from it, and a
/// reload replaces the whole table.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    /// All records, in source order.
    pub records: Vec<PlayerRecord>,
    /// Sorted set of distinct team codes present in `records`.
    pub teams: BTreeSet<String>,
}

impl PlayerTable {
    /// Build the team index from normalized records.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let teams = records.iter().map(|r| r.team.clone()).collect();
        PlayerTable { records, teams }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(
        rank: u32,
        player: &str,
        team: &str,
        g: u32,
        mp: f64,
        pts: f64,
    ) -> PlayerRecord {
        PlayerRecord {
            rank,
            player: player.to_string(),
            team: team.to_string(),
            games_played: g,
            minutes_per_game: mp,
            points_per_game: pts,
        }
    }

    #[test]
    fn team_index_is_sorted_and_deduplicated() {
        let table = PlayerTable::from_records(vec![
            record(1, "A", "LAL", 70, 34.0, 25.1),
            record(2, "B", "BOS", 65, 33.2, 27.0),
            record(3, "C", "LAL", 58, 28.9, 14.5),
        ]);
        let teams: Vec<&str> = table.teams.iter().map(String::as_str).collect();
        assert_eq!(teams, vec!["BOS", "LAL"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn empty_table_has_no_teams() {
        let table = PlayerTable::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(table.teams.is_empty());
    }
}
