//! Terminal output and logging for the binary. Not part of the library API.

pub mod logging;
pub mod print;
