pub mod neows;

pub use neows::NeoWsFeedProvider;
