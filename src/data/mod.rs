//! Data layer: series types, parsing, and peak detection.
//!
//! Architecture:
//! ```text
//!   text source (file / stream)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  header skip + token parse → Series
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Series   │  Vec<i64>, fixed capacity
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ detector  │  value > threshold → PeakIndexList
//!   └──────────┘
//! ```

pub mod detector;
pub mod error;
pub mod loader;
pub mod model;
