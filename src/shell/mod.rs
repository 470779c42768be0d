// Composition root for the calculator.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the file backed key-value store and wire it into the session.
// - Drive the session from line-based input (one token per line).

pub mod config;
pub mod driver;
