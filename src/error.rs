use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot create output file {}: {source}", .path.display())]
    OutputCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode image: {0}")]
    Encoding(#[from] image::ImageError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot start render threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
