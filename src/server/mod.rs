// Server module entry point
// Listener setup, per-connection serving, and interrupt handling.

pub mod connection;
pub mod listener;
pub mod signal;

pub use connection::accept_connection;
pub use listener::bind_listener;
pub use signal::spawn_signal_listener;
