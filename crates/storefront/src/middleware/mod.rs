//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, capture errors), added in `main`
//! 2. CORS (answer preflight before anything else runs)
//! 3. `TraceLayer` (request span)
//! 4. Request ID (record on the span, echo in the response)
//! 5. Security headers

pub mod cors;
pub mod request_id;
pub mod security_headers;

pub use cors::cors_layer;
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
