//! Listening socket and per-connection worker dispatch.

pub mod listener;

pub use listener::Dispatcher;
