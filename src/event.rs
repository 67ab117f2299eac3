// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! This event module provides a unified input Event, describing key presses
//! and the window-close signal. Events polled by the sdl or soft adapter are
//! converted here to unified Event and then drained once per frame.

use crate::render::adapter::Adapter;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Event {
    /// User asked to close the window
    Quit,
    /// A key went down
    Key(KeyEvent),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCode {
    /// Letters are reported lowercase
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    /// Any key without a dedicated variant
    Other,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    /// Held-down auto repeat
    pub repeat: bool,
}

impl KeyEvent {
    pub const fn new(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            repeat: false,
        }
    }
}

impl Event {
    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    pub fn char(c: char) -> Event {
        Event::key(KeyCode::Char(c))
    }

    /// Quit signal or the Esc key
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Event::Quit
                | Event::Key(KeyEvent {
                    code: KeyCode::Esc,
                    ..
                })
        )
    }
}

/// Polls the adapter until its queue is empty, appending every event to es.
/// Never waits for new events. Returns true if a quit request was seen.
pub fn drain_events(adapter: &mut dyn Adapter, es: &mut Vec<Event>) -> bool {
    let mut quit = false;
    while let Some(e) = adapter.poll_event() {
        if e.is_quit() {
            quit = true;
        }
        es.push(e);
    }
    quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::adapter::soft::SoftAdapter;

    #[test]
    fn drain_on_empty_queue_returns_immediately() {
        let mut ad = SoftAdapter::new();
        let mut es = vec![];
        assert!(!drain_events(&mut ad, &mut es));
        assert!(es.is_empty());
    }

    #[test]
    fn drain_takes_everything_queued_for_this_tick() {
        let mut ad = SoftAdapter::new();
        ad.push_event(Event::char('q'));
        ad.push_event(Event::key(KeyCode::Up));
        ad.push_event(Event::Quit);
        let mut es = vec![];
        assert!(drain_events(&mut ad, &mut es));
        assert_eq!(es.len(), 3);
        assert_eq!(es[1], Event::key(KeyCode::Up));
        assert!(ad.poll_event().is_none());
    }

    #[test]
    fn esc_counts_as_quit() {
        assert!(Event::key(KeyCode::Esc).is_quit());
        assert!(!Event::char('e').is_quit());
    }
}
