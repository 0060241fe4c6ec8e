//! Studio shell for folio.
//!
//! Wires the document engine and the market engine to the external
//! collaborators the product depends on:
//!
//! | Boundary          | Trait                 | In-repo implementation |
//! |-------------------|-----------------------|------------------------|
//! | identity/session  | [`IdentityProvider`]  | [`MemoryIdentity`]     |
//! | payments          | [`PaymentProcessor`]  | [`SimulatedProcessor`] |
//! | preview           | [`PreviewRenderer`]   | [`TextPreview`]        |
//! | rich-text widget  | [`RichTextSurface`]   | [`MarkupBuffer`]       |
//! | market data       | `MarketSource`        | `FixtureSource`        |
//!
//! [`Studio`] owns one of everything and is what the `folio` binary drives.

pub mod config;
pub mod error;
pub mod identity;
pub mod payment;
pub mod preview;
pub mod studio;
pub mod surface;

pub use config::{LatencyConfig, PageSize, PreviewConfig, StudioConfig, config_file_path, load_config, load_or_default};
pub use error::StudioError;
pub use identity::{AuthState, GuardDecision, IdentityError, IdentityProvider, MemoryIdentity, Route, User, guard};
pub use payment::{
    Checkout, CheckoutState, PaymentError, PaymentProcessor, PaymentReceipt, PlanCatalog,
    SimulatedProcessor,
};
pub use preview::{PreviewPage, PreviewRenderer, PreviewRequest, TextPreview};
pub use studio::{Collaborators, Studio};
pub use surface::{MarkupBuffer, RichTextSurface};

/// Result type for studio operations.
pub type Result<T> = std::result::Result<T, StudioError>;
