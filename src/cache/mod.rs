mod sqlite;

pub use sqlite::{CacheManager, CacheRequest};
