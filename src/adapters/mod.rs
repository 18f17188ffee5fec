// Adapters layer: concrete implementations for external systems (JMA site over HTTP, HTML parsing).

pub mod html;
pub mod http;

pub use http::JmaPageFetcher;
