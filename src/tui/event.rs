use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Terminal input the display loop reacts to. Everything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Interrupt,
}

/// Translate a raw crossterm event. `None` means "ignore it".
pub fn translate(event: &Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            // Release/repeat events show up on some platforms; only presses count
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            match (key_event.modifiers, key_event.code) {
                (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
                    Some(TuiEvent::Interrupt)
                }
                _ => None,
            }
        }
        _ => None,
    }
}
