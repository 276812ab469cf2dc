use thiserror::Error;

/// Errors generated by the logs library.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors generated installing the global subscriber.
    #[error(transparent)]
    InitSubscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Errors generated parsing a log level filter.
    #[error(transparent)]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Errors generated formatting a date time.
    #[error(transparent)]
    TimeFormat(#[from] time::error::Format),

    /// Errors generated parsing a date time format description.
    #[error(transparent)]
    InvalidFormatDescription(#[from] time::error::InvalidFormatDescription),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
