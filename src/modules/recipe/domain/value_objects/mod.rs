pub mod scoring_snapshot;

pub use scoring_snapshot::{ScoringSnapshot, SnapshotIngredient};
