//! HTTP clients for the delegated infrastructure providers.
//!
//! Realtime fan-out, livestream media, and web push delivery all run outside
//! this process. Each submodule wraps one provider's REST surface behind a
//! small typed client held in [`AppState`](crate::server::model::app::AppState),
//! so the service layer never touches raw HTTP.

pub mod push;
pub mod realtime;
pub mod sfu;

pub use push::PushClient;
pub use realtime::RealtimeClient;
pub use sfu::SfuClient;
