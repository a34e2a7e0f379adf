//! Domain models for the weather evaluation API

mod beaufort;
mod tendency;
mod weather;

pub use beaufort::*;
pub use tendency::*;
pub use weather::*;
