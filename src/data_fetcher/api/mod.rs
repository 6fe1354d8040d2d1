pub mod fetch_utils;
pub mod http_client;
pub mod schedule_api;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export schedule API functions
pub use schedule_api::*;
