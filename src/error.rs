use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read root directory '{path}': {source}")]
    RootUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
