pub mod digest;
pub mod record;
pub mod risk;
pub mod summary;

pub use digest::*;
pub use record::*;
pub use risk::*;
pub use summary::*;
