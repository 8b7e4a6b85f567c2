//! Infrastructure helpers shared by the domain and the index

mod slug;

pub use slug::{PLACEHOLDER_PREFIX, normalize, slug_or_placeholder};
