use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcholaliaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("model artifact error: {0}")]
    Artifact(#[from] postcard::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("model contains no prefixes")]
    EmptyModel,
}

pub type Result<T> = std::result::Result<T, EcholaliaError>;
