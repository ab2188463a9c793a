use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid listen address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("HTTP server error: {0}")]
    Server(#[from] hyper::Error),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
