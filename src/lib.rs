pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod pipeline;

// Error handling
pub use error::Error;
pub use fehler::{throw, throws};
