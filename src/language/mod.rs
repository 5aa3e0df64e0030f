// Types describing position records and the options controlling output

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
