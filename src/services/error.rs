/// Errors raised by the capture, encoding, and submission services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform screen grabber failed.
    #[error("screen capture failed: {0}")]
    Capture(#[from] xcap::XCapError),

    /// No monitor was available to capture.
    #[error("no monitor available to capture")]
    NoMonitor,

    /// The captured frame could not be encoded to the requested format.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// The request could not be sent or the backend answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A blocking worker panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
