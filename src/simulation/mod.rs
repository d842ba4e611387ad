//! Synthetic reading generation and periodic broadcast.

mod broadcaster;
mod generator;
mod publisher;

pub use broadcaster::*;
pub use generator::*;
pub use publisher::*;

#[cfg(test)]
mod broadcaster_test;
