//! Event handlers: the main-thread dispatcher.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
