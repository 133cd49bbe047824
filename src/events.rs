//! Discrete game events and the terminal input that produces them.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use std::io;
use std::time::Duration;

/// Everything the session reacts to during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Leave the game loop after this frame.
    Quit,
    /// Pointer press (or Enter): begin a round from the menu.
    Start,
    /// Jump key (Space).
    Jump,
    /// Spawn timer fired.
    SpawnObstacle,
    /// Animation timer fired.
    AnimateBird,
}

/// Map a raw terminal event onto a game event, if it means anything.
pub fn translate(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(GameEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameEvent::Quit),
            KeyCode::Char(' ') => Some(GameEvent::Jump),
            KeyCode::Enter => Some(GameEvent::Start),
            _ => None,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(GameEvent::Start),
            _ => None,
        },
        _ => None,
    }
}

/// Source of input events, drained once per frame.
pub trait InputSource {
    fn poll_events(&mut self) -> io::Result<Vec<GameEvent>>;
}

/// Reads whatever crossterm has queued without blocking.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_events(&mut self) -> io::Result<Vec<GameEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(game_event) = translate(&event::read()?) {
                events.push(game_event);
            }
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseButton, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(translate(&press(KeyCode::Char(' '))), Some(GameEvent::Jump));
        assert_eq!(translate(&press(KeyCode::Enter)), Some(GameEvent::Start));
        assert_eq!(translate(&press(KeyCode::Esc)), Some(GameEvent::Quit));
        assert_eq!(translate(&press(KeyCode::Char('q'))), Some(GameEvent::Quit));
        assert_eq!(
            translate(&key(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press
            )),
            Some(GameEvent::Quit)
        );
        assert_eq!(translate(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(&release), None);
    }

    #[test]
    fn test_mouse_press_starts() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(GameEvent::Start)
        );
        assert_eq!(translate(&mouse(MouseEventKind::Moved)), None);
        assert_eq!(translate(&Event::Resize(80, 24)), None);
    }
}
