pub mod config;
pub mod error;
pub mod factory;
pub mod normalize;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{FeedError, NormalizeError};
pub use factory::*;
pub use normalize::normalize;
pub use traits::*;
pub use types::*;
