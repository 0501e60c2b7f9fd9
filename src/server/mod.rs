// Server module entry point
// Listener setup, connection handling, the accept loop and shutdown signals

pub mod connection;
pub mod listener;
pub mod serve;
pub mod signal;

pub use listener::bind_listener;
pub use serve::serve;
pub use signal::shutdown_signal;
