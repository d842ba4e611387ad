//! In-memory detection store and the query surface over it.

mod cache;
mod query;

pub use cache::*;
pub use query::*;
