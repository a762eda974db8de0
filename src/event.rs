use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::role::Role;

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// An event that is emitted on a regular schedule.
    Tick,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // System
    Quit,

    // Session
    SignInComplete(Role),
    Logout,

    // Chat. `session` is the chat generation the reply was asked in
    ChatReply { session: u64, reply: &'static str },
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns a task reading the terminal.
    pub fn new(tick_rate: Duration) -> Self {
        let handler = Self::detached();
        let actor = EventTask::new(handler.sender.clone(), tick_rate);
        tokio::spawn(async { actor.run().await });
        handler
    }

    /// A handler with no terminal reader or ticks. Only app events arrive.
    pub fn detached() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Receives an event from the sender.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Returns an already queued event without waiting.
    pub fn try_next(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }

    /// Queue an app event after `delay`. Fire and forget, there is no way to cancel it.
    pub fn send_delayed(&self, delay: Duration, app_event: AppEvent) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(Event::App(app_event));
        });
    }
}

/// A task that handles reading crossterm events and emitting tick events on a regular schedule.
struct EventTask {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    tick_rate: Duration,
}

impl EventTask {
    /// Constructs a new instance of [`EventTask`].
    fn new(sender: mpsc::UnboundedSender<Event>, tick_rate: Duration) -> Self {
        Self { sender, tick_rate }
    }

    /// Runs the event loop.
    async fn run(self) -> color_eyre::Result<()> {
        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    /// Sends an event to the receiver.
    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delayed_event_arrives_after_delay() {
        let mut events = EventHandler::detached();
        let start = tokio::time::Instant::now();

        events.send_delayed(Duration::from_millis(1500), AppEvent::SignInComplete(Role::Teacher));
        assert!(events.try_next().is_none());

        match events.next().await.unwrap() {
            Event::App(AppEvent::SignInComplete(role)) => assert_eq!(role, Role::Teacher),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_send_is_immediate() {
        let mut events = EventHandler::detached();
        events.send(AppEvent::Quit);
        assert!(matches!(events.try_next(), Some(Event::App(AppEvent::Quit))));
    }
}
