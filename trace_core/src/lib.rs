pub mod error;
pub mod gameplay;
pub mod input;
pub mod path;

pub use error::TraceError;
