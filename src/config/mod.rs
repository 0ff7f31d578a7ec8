pub mod traits;
pub mod evolution;
pub mod baseline;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use baseline::BaselineConfig;
pub use traits::ConfigSection;

/// Default gene pool: space followed by A-Z.
pub const DEFAULT_ALPHABET: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DEFAULT_TARGET: &str = "METHINKS IT IS LIKE A WEASEL";
