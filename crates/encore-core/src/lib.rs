pub mod error;
pub mod types;

pub use error::{EncoreError, EncoreResult};
pub use types::*;
