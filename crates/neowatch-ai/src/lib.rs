pub mod config;
pub mod error;
pub mod factory;
pub mod prompt;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::ProviderError;
pub use factory::*;
pub use prompt::*;
pub use traits::*;
pub use types::*;
