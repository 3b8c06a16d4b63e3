//! Console front end for the warehouse model.
//!
//! Reads pallets and boxes interactively, re-asking on bad input, and prints
//! the pallet reports. The domain crates never see raw text.

pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod session;

pub use config::{Config, ReportFormat};
pub use error::{ConsoleError, ConsoleResult};
pub use session::Session;
