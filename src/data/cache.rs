use std::sync::Arc;

use super::loader::LoadError;
use super::model::PlayerTable;

// ---------------------------------------------------------------------------
// Process-wide table cache
// ---------------------------------------------------------------------------

/// Single-slot cache for the loaded table, owned by the application state.
///
/// The source changes at most once per season update, so there is no expiry:
/// the table lives until [`TableCache::invalidate`] or a successful
/// [`TableCache::refresh`]. The load function is injected per call, which
/// keeps the cache itself free of any network dependency.
#[derive(Default)]
pub struct TableCache {
    slot: Option<Arc<PlayerTable>>,
}

impl TableCache {
    /// The cached table, if any. The `Arc` lets views outlive a later swap.
    pub fn table(&self) -> Option<Arc<PlayerTable>> {
        self.slot.clone()
    }

    /// Return the cached table, loading it first if the slot is empty.
    pub fn get_or_load<F>(&mut self, load: F) -> Result<Arc<PlayerTable>, LoadError>
    where
        F: FnOnce() -> Result<PlayerTable, LoadError>,
    {
        if let Some(table) = &self.slot {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(load()?);
        self.slot = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Reload unconditionally. The slot is replaced only on success, so a
    /// failed refresh keeps serving the previous table.
    pub fn refresh<F>(&mut self, load: F) -> Result<Arc<PlayerTable>, LoadError>
    where
        F: FnOnce() -> Result<PlayerTable, LoadError>,
    {
        let table = Arc::new(load()?);
        self.slot = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Drop the cached table; the next `get_or_load` hits the source again.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn table_of(team: &str) -> PlayerTable {
        PlayerTable::from_records(vec![record(1, "A", team, 60, 30.0, 20.0)])
    }

    #[test]
    fn get_or_load_loads_exactly_once() {
        let mut cache = TableCache::default();
        let mut calls = 0;

        for _ in 0..3 {
            let t = cache
                .get_or_load(|| {
                    calls += 1;
                    Ok(table_of("LAL"))
                })
                .unwrap();
            assert_eq!(t.len(), 1);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let mut cache = TableCache::default();
        cache.get_or_load(|| Ok(table_of("LAL"))).unwrap();
        cache.invalidate();
        assert!(cache.table().is_none());

        let t = cache.get_or_load(|| Ok(table_of("BOS"))).unwrap();
        assert!(t.teams.contains("BOS"));
    }

    #[test]
    fn failed_refresh_keeps_the_previous_table() {
        let mut cache = TableCache::default();
        cache.get_or_load(|| Ok(table_of("LAL"))).unwrap();

        let err = cache.refresh(|| Err(LoadError::NoTable));
        assert!(err.is_err());

        let kept = cache.table().expect("previous table still cached");
        assert!(kept.teams.contains("LAL"));
    }

    #[test]
    fn failed_initial_load_leaves_the_slot_empty() {
        let mut cache = TableCache::default();
        assert!(cache.get_or_load(|| Err(LoadError::NoTable)).is_err());
        assert!(cache.table().is_none());
    }
}
