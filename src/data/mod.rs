/// Data layer: sources, fetching, the record model, and search.
///
/// Architecture:
/// ```text
///   MTL / MAL endpoint (JSON array)
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  GET → parse → lowercase keys → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Vec<Record>, column index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keyword → matching row indices
///   └──────────┘
/// ```

pub mod fetch;
pub mod filter;
pub mod model;
pub mod source;
