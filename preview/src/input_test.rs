use super::*;

#[test]
fn dom_button_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(3), Button::Other);
    assert_eq!(Button::from_dom(-1), Button::Other);
}

#[test]
fn pan_state_defaults_to_idle() {
    assert_eq!(PanState::default(), PanState::Idle);
    assert!(!PanState::default().is_panning());
}

#[test]
fn panning_state_reports_panning() {
    let state = PanState::Panning { last_screen: Point::new(1.0, 2.0) };
    assert!(state.is_panning());
}

#[test]
fn drag_state_defaults_to_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
}
