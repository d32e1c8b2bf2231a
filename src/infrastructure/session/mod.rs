//! Session providers.

mod static_session;

pub use static_session::StaticSession;
