use crate::filter::FilterError;
use crate::lister::FetchError;

/// Failures that turn an invocation CRITICAL
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("missing required argument: {0}")]
    MissingField(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("AWS credentials unavailable: {0}")]
    Credentials(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("could not get metrics list")]
    Transport(#[source] FetchError),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}
