//! Error taxonomy for menu board operations.

use crate::panel::PanelId;
use thiserror::Error;

/// Errors produced by [`crate::MenuStateStore`].
///
/// None of these are fatal: every failure leaves the board unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A document handed to `apply` has an invalid structure
    #[error("Malformed menu document: {0}")]
    MalformedDocument(String),

    /// Import text is not JSON or not shaped like a menu document
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Persistent storage could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The featured panel cannot be deleted, moved or recolored
    #[error("The featured panel cannot be changed this way")]
    FeaturedPanelProtected,

    #[error("No panel with id {0}")]
    PanelNotFound(PanelId),
}

pub type MenuResult<T> = Result<T, MenuError>;
