//! Error types

use tabledom::{DomError, SelectorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreezeError {
    /// A configuration call got arguments of the wrong shape, an unknown
    /// setting key, or a value of the wrong type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The dispatch surface was called with an action it does not know.
    #[error("unrecognized action \"{0}\"")]
    UnrecognizedAction(String),

    /// The element a controller works on is missing from the document.
    #[error("element \"{0}\" is not in the document")]
    NotInDocument(String),

    #[error("invalid selector \"{selector}\": {source}")]
    Selector {
        selector: String,
        #[source]
        source: SelectorError,
    },

    #[error(transparent)]
    Dom(#[from] DomError),
}

impl FreezeError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FreezeError>;
