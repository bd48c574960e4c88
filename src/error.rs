use thiserror::Error;

/// Errors of the driver layers: parameter files, result files, thread pools.
///
/// The simulation operations themselves (build, step, clusters, layout)
/// are total and never return this.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unable to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unable to seed random number generator: {0}")]
    Rng(#[from] rand::Error),

    #[error("unable to set up logging: {0}")]
    Logging(String),
}

impl SimError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
