// API module structure
mod client;

// Re-export commonly used types
pub use client::{create_client, ApiClient, ApiResponse, IntakeApi, IntakeApiTrait};

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use client::tests;
