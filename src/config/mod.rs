pub mod news;

pub use news::{FeedSourceCfg, NewsConfig};
