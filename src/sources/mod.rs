pub mod file;
pub mod traits;
pub mod types;

pub use file::FileFeedSource;
pub use traits::FeedSource;
pub use types::RunConfig;
