//! Control error types

use thiserror::Error;

/// Slide control errors
#[derive(Error, Debug)]
pub enum SlideUnlockError {
    /// Thumb content is an icon but no icon source was configured
    #[error("thumb content is `icon` but no icon source was set")]
    MissingIcon,

    /// Icon bytes could not be decoded as an image
    #[error("failed to decode thumb icon: {0}")]
    IconDecode(String),

    /// Icon file could not be read
    #[error("failed to load thumb icon: {0}")]
    IconLoad(String),

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Draw requested before the first size change
    #[error("control has not been laid out yet")]
    NotLaidOut,
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, SlideUnlockError>;
