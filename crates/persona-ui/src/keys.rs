use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use persona_types::{CarouselView, UiEvent};

/// Map a key press to a carousel command, given what is on screen
pub fn key_to_event(key: KeyEvent, view: &CarouselView) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiEvent::Close)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Close),
        // Retry is only offered on the error panel
        KeyCode::Char('r') if view.is_failed() => Some(UiEvent::Refresh),
        KeyCode::Enter | KeyCode::Char(' ') if view.is_ready() => Some(UiEvent::ToggleFlip),
        KeyCode::Right | KeyCode::Char('l') if view.is_ready() => Some(UiEvent::Next),
        KeyCode::Left | KeyCode::Char('h') if view.is_ready() => Some(UiEvent::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready() -> CarouselView {
        CarouselView::Ready {
            card: Some(persona_types::Card {
                id: "Owl-0".into(),
                animal_name: "Owl".into(),
                representative: "Kelechi".into(),
                generic_description: "Nocturnal".into(),
                generic_traits: vec!["Wise".into(), "Silent".into(), "Watchful".into()],
                personalized_description: "Sees clearly".into(),
                image_url: "assets/owl.jpg".into(),
            }),
            index: 0,
            total: 1,
            flipped: false,
        }
    }

    #[test]
    fn test_ready_bindings() {
        let view = ready();
        assert_eq!(key_to_event(press(KeyCode::Enter), &view), Some(UiEvent::ToggleFlip));
        assert_eq!(key_to_event(press(KeyCode::Char(' ')), &view), Some(UiEvent::ToggleFlip));
        assert_eq!(key_to_event(press(KeyCode::Right), &view), Some(UiEvent::Next));
        assert_eq!(key_to_event(press(KeyCode::Char('h')), &view), Some(UiEvent::Previous));
        assert_eq!(key_to_event(press(KeyCode::Char('r')), &view), None);
    }

    #[test]
    fn test_retry_only_when_failed() {
        let failed = CarouselView::Failed {
            message: "boom".into(),
        };
        assert_eq!(key_to_event(press(KeyCode::Char('r')), &failed), Some(UiEvent::Refresh));
        assert_eq!(key_to_event(press(KeyCode::Right), &failed), None);
        assert_eq!(key_to_event(press(KeyCode::Char('r')), &CarouselView::Loading), None);
    }

    #[test]
    fn test_quit_keys_always_work() {
        for view in [CarouselView::Loading, ready()] {
            assert_eq!(key_to_event(press(KeyCode::Char('q')), &view), Some(UiEvent::Close));
            assert_eq!(key_to_event(press(KeyCode::Esc), &view), Some(UiEvent::Close));
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(key_to_event(ctrl_c, &view), Some(UiEvent::Close));
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_event(key, &ready()), None);
    }
}
