use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeaselError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Symbol '{symbol}' is not part of the alphabet '{alphabet}'")]
    UnknownSymbol { symbol: char, alphabet: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WeaselError>;
