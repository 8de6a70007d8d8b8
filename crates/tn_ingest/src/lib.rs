pub mod hashtags;
pub mod query;

pub use hashtags::extract_hashtags;
pub use query::build_query;
