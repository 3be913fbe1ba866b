use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid inclusion path: {0}")]
    InvalidEntry(String),

    #[error("Base directory not found: {0}")]
    BaseDirNotFound(String),
}
