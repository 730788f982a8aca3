//! Events delivered to the session, and the queue they travel through.
//!
//! Every producer (countdown thread, input reader) owns an `EventSender`;
//! the single consumer is the event loop on the main thread.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// Input, timer and window events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    PointerMove { x: i32, y: i32 },
    PointerClick { x: i32, y: i32 },
    TimerTick,
    /// Window contents were damaged and need a repaint.
    Exposed,
    Quit,
}

impl Event {
    /// Parse a text command: `move X Y`, `click X Y`, `tick`, `expose`, `quit`.
    #[must_use]
    pub fn parse_command(line: &str) -> Option<Event> {
        let mut words = line.split_whitespace();
        let command = words.next()?;
        let mut coord = || words.next()?.parse::<i32>().ok();

        let event = match command {
            "move" => Event::PointerMove { x: coord()?, y: coord()? },
            "click" => Event::PointerClick { x: coord()?, y: coord()? },
            "tick" => Event::TimerTick,
            "expose" => Event::Exposed,
            "quit" => Event::Quit,
            _ => return None,
        };
        Some(event)
    }
}

/// Whether the loop should keep running after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub type EventSender = Sender<Event>;
pub type EventReceiver = Receiver<Event>;

/// Create the event queue.
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(Event::parse_command("click 10 -4"), Some(Event::PointerClick { x: 10, y: -4 }));
        assert_eq!(Event::parse_command("  move 3 7 "), Some(Event::PointerMove { x: 3, y: 7 }));
        assert_eq!(Event::parse_command("tick"), Some(Event::TimerTick));
        assert_eq!(Event::parse_command("expose"), Some(Event::Exposed));
        assert_eq!(Event::parse_command("quit"), Some(Event::Quit));
    }

    #[test]
    fn test_parse_command_rejects() {
        assert_eq!(Event::parse_command(""), None);
        assert_eq!(Event::parse_command("click 10"), None);
        assert_eq!(Event::parse_command("click a b"), None);
        assert_eq!(Event::parse_command("jump 1 2"), None);
    }

    #[test]
    fn test_channel_preserves_order() {
        let (tx, rx) = channel();
        tx.send(Event::TimerTick).unwrap();
        tx.send(Event::Quit).unwrap();
        assert_eq!(rx.recv().unwrap(), Event::TimerTick);
        assert_eq!(rx.recv().unwrap(), Event::Quit);
    }
}
