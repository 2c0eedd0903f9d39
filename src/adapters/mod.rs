// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod page;

pub use http::HttpCalorieApi;
pub use page::MemoryPage;
