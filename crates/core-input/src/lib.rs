//! Async input service: crossterm `EventStream` mapped into gridcraft events.

mod async_service;
mod mapping;
pub use async_service::AsyncInputShutdown;

use async_service::spawn_async_event_task;

use core_events::Event;
use tokio::task::JoinHandle;

/// Spawn the async input service backed by `crossterm::EventStream`.
///
/// Returns the `JoinHandle` for the background task alongside a shutdown handle
/// that can be used to request immediate termination.
pub fn spawn_async_input(
    sender: tokio::sync::mpsc::Sender<Event>,
) -> (JoinHandle<()>, AsyncInputShutdown) {
    spawn_async_event_task(sender)
}
