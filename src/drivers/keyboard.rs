use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Smooths over backend differences before events reach the app: release
/// and repeat key events are dropped, and Shift+Tab is folded into
/// `KeyCode::BackTab`.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer;

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(mut key) => {
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                match key.kind {
                    KeyEventKind::Release | KeyEventKind::Repeat => None,
                    KeyEventKind::Press => Some(Event::Key(key)),
                }
            }
            other => Some(other),
        }
    }
}
