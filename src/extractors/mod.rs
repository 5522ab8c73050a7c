//! Request extractors.

mod body;
pub use body::JsonBody;
