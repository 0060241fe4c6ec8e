//! Error types for the studio shell.

use thiserror::Error;

use folio_doc::DocError;
use folio_market::MarketError;

use crate::identity::{IdentityError, Route};
use crate::payment::PaymentError;

/// Top-level studio error.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// A protected view was reached without a signed-in user.
    #[error("sign in required for {0}")]
    SignInRequired(Route),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Doc(#[from] DocError),

    #[error(transparent)]
    Market(#[from] MarketError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
