pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod pacing;
pub mod types;

pub use config::AerofastConfig;
pub use content::SiteContent;
pub use error::{AerofastError, Result};
pub use events::SiteEvent;
pub use pacing::{ImmediatePacer, Pacer, TokioPacer};
pub use types::*;
