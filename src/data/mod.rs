/// Data layer: core types, loading, caching, filtering, and chart kernels.
///
/// Architecture:
/// ```text
///  per-game stats page (HTML)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + project/rename/dropna/coerce/floor → PlayerTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ TableCache  │  one slot, manual invalidation
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  min-games + team predicates → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  correlation / histogram / box summaries for the charts
///   └──────────┘
/// ```

pub mod cache;
pub mod export;
pub mod filter;
pub mod html;
pub mod loader;
pub mod model;
pub mod stats;
