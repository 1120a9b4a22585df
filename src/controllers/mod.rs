pub mod catalog;
#[cfg(test)]
pub mod mock;
pub mod oauth;
pub mod parser;
pub mod root;
pub mod search;
pub mod ytmusic;
pub use catalog::CatalogService;
pub use root::RootController;
pub use search::SearchProxy;
pub use ytmusic::{YTMusicClient, YTMusicConfig};
