use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown scene \"{0}\"")]
    UnknownScene(String),

    #[error("failed to build the render pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
