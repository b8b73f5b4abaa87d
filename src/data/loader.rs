use std::time::Duration;

use thiserror::Error;

use super::html;
use super::model::{PlayerRecord, PlayerTable};

// ---------------------------------------------------------------------------
// Source contract
// ---------------------------------------------------------------------------

/// The one external read this app performs.
pub const SOURCE_URL: &str =
    "https://www.basketball-reference.com/leagues/NBA_2024_per_game.html";

/// Column names the source table must carry, in canonical order:
/// rank, player, team, games, minutes per game, points per game.
pub const SOURCE_COLUMNS: [&str; 6] = ["Rk", "Player", "Tm", "G", "MP", "PTS"];

/// Fixed minimum games-played threshold applied unconditionally at load time.
/// The UI slider's lower bound equals this, so the slider can only refine it.
pub const MIN_GAMES_FLOOR: u32 = 50;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a load produced no table. Any variant aborts the whole load; a
/// partial table is never served.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no table found in document")]
    NoTable,

    #[error("source table is missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    BadNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch the source page and normalize it into a [`PlayerTable`].
///
/// Blocks the calling thread for the duration of the request; the fetch
/// timeout surfaces as [`LoadError::Http`].
pub fn load() -> Result<PlayerTable, LoadError> {
    let doc = fetch_document(SOURCE_URL)?;
    let table = parse_document(&doc)?;
    log::info!(
        "loaded {} players across {} teams from {}",
        table.len(),
        table.teams.len(),
        SOURCE_URL
    );
    Ok(table)
}

fn fetch_document(url: &str) -> Result<String, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("courtside/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(http_err)?;
    client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(http_err)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a fetched document into a [`PlayerTable`].
///
/// The first table in the document is authoritative. Its header row maps
/// [`SOURCE_COLUMNS`] to cell positions; every other column is dropped.
/// Body rows are skipped when they echo the header (the source repeats its
/// header every twenty rows) or when a required cell is missing/empty.
/// Numeric cells that fail to parse abort the load — a schema change
/// upstream must not pass through as text. Rows below [`MIN_GAMES_FLOOR`]
/// are dropped. Source order is preserved.
pub fn parse_document(doc: &str) -> Result<PlayerTable, LoadError> {
    let tables = html::tables(doc);
    let table = tables.first().ok_or(LoadError::NoTable)?;

    let mut rows = html::rows(table).into_iter();
    let header = rows.next().ok_or(LoadError::NoTable)?;

    let mut col = [0usize; 6];
    for (i, name) in SOURCE_COLUMNS.iter().enumerate() {
        col[i] = header
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))?;
    }

    let mut records = Vec::new();
    for (row_no, cells) in rows.enumerate() {
        let field = |i: usize| cells.get(col[i]).map(String::as_str).unwrap_or("");

        // Repeated in-table header row.
        if (0..6).all(|i| field(i) == SOURCE_COLUMNS[i]) {
            continue;
        }
        // dropna: any required cell absent or empty drops the row.
        if (0..6).any(|i| field(i).is_empty()) {
            continue;
        }

        let rank = parse_u32(row_no, "Rk", field(0))?;
        let games_played = parse_u32(row_no, "G", field(3))?;
        let minutes_per_game = parse_f64(row_no, "MP", field(4))?;
        let points_per_game = parse_f64(row_no, "PTS", field(5))?;

        if games_played < MIN_GAMES_FLOOR {
            continue;
        }

        records.push(PlayerRecord {
            rank,
            player: field(1).to_string(),
            team: field(2).to_string(),
            games_played,
            minutes_per_game,
            points_per_game,
        });
    }

    Ok(PlayerTable::from_records(records))
}

fn parse_u32(row: usize, column: &'static str, value: &str) -> Result<u32, LoadError> {
    value.parse().map_err(|_| LoadError::BadNumber {
        row,
        column,
        value: value.to_string(),
    })
}

fn parse_f64(row: usize, column: &'static str, value: &str) -> Result<f64, LoadError> {
    value.parse().map_err(|_| LoadError::BadNumber {
        row,
        column,
        value: value.to_string(),
    })
}
