use std::io::Write;

use anyhow::{Context, Result};

use super::model::{PlayerRecord, COLUMN_LABELS};

// ---------------------------------------------------------------------------
// Filtered-view export
// ---------------------------------------------------------------------------

/// Write the filtered view as CSV under the canonical column labels.
pub fn write_csv<W: Write>(writer: W, records: &[&PlayerRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMN_LABELS).context("writing CSV header")?;
    for r in records {
        wtr.write_record([
            r.rank.to_string(),
            r.player.clone(),
            r.team.clone(),
            r.games_played.to_string(),
            r.minutes_per_game.to_string(),
            r.points_per_game.to_string(),
        ])
        .with_context(|| format!("writing CSV row for {}", r.player))?;
    }
    wtr.flush().context("flushing CSV")?;
    Ok(())
}

/// Write the filtered view as a JSON array of records.
pub fn write_json<W: Write>(writer: W, records: &[&PlayerRecord]) -> Result<()> {
    serde_json::to_writer_pretty(writer, records).context("serializing JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn csv_has_canonical_header_and_one_line_per_record() {
        let rows = [record(1, "Jayson Tatum", "BOS", 74, 35.7, 26.9)];
        let view: Vec<&PlayerRecord> = rows.iter().collect();

        let mut buf = Vec::new();
        write_csv(&mut buf, &view).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Rank,Player,Team,Games Played,Minutes Per Game,Points Per Game"
        );
        assert_eq!(lines.next().unwrap(), "1,Jayson Tatum,BOS,74,35.7,26.9");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_quotes_names_with_commas() {
        let rows = [record(2, "Smith, Jr.", "NYK", 60, 20.0, 8.0)];
        let view: Vec<&PlayerRecord> = rows.iter().collect();

        let mut buf = Vec::new();
        write_csv(&mut buf, &view).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"Smith, Jr.\""));
    }

    #[test]
    fn json_round_trips_with_label_keys() {
        let rows = [record(3, "Nikola Jokić", "DEN", 79, 34.6, 26.4)];
        let view: Vec<&PlayerRecord> = rows.iter().collect();

        let mut buf = Vec::new();
        write_json(&mut buf, &view).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["Player"], "Nikola Jokić");
        assert_eq!(parsed[0]["Games Played"], 79);
        assert_eq!(parsed[0]["Points Per Game"], 26.4);
    }
}
