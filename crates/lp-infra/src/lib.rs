//! leadpage infrastructure
//!
//! Adapters for the `lp-core` ports that do not need a browser: the
//! onboarding HTTP client, an in-memory key/value store, a tokio timer and
//! TOML config loading.

pub mod config;
pub mod http;
pub mod storage;
#[cfg(not(target_arch = "wasm32"))]
pub mod time;

pub use http::{resolve_endpoint, EndpointError, ReqwestOnboardingLinkClient};
pub use storage::InMemoryKeyValueStore;
#[cfg(not(target_arch = "wasm32"))]
pub use time::TokioTimer;
