pub mod file;
pub mod http;
pub mod mock;
pub mod traits;

pub use file::JsonFileProvider;
pub use http::HttpProvider;
pub use mock::MockCatalog;
pub use traits::ListingProvider;
