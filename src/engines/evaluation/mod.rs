pub mod scorer;

pub use scorer::{DistanceScorer, ExactMatchScorer, Score, Scorer};
