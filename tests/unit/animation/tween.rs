use super::*;
use crate::animation::ease::Ease;

const LINEAR_1S: EaseProfile = EaseProfile::new(1.0, Ease::Linear);

#[test]
fn ease_to_interpolates_from_displayed_value() {
    let mut engine = TweenEngine::new();
    engine.snap(Channel::CursorX, 0.0);
    engine.ease_to(Channel::CursorX, 100.0, LINEAR_1S);
    assert_eq!(engine.value(Channel::CursorX), Some(0.0));

    engine.advance(0.25);
    assert!((engine.value(Channel::CursorX).unwrap() - 25.0).abs() < 1e-9);

    engine.advance(1.0);
    assert_eq!(engine.value(Channel::CursorX), Some(100.0));
    assert!(!engine.is_animating(Channel::CursorX));
}

#[test]
fn retarget_restarts_from_current_value() {
    let mut engine = TweenEngine::new();
    engine.snap(Channel::MaskScale, 0.0);
    engine.ease_to(Channel::MaskScale, 10.0, LINEAR_1S);
    engine.advance(0.5);
    engine.ease_to(Channel::MaskScale, 0.0, LINEAR_1S);
    assert_eq!(engine.target(Channel::MaskScale), Some(0.0));

    engine.advance(0.5);
    assert!((engine.value(Channel::MaskScale).unwrap() - 2.5).abs() < 1e-9);
}

#[test]
fn unset_channel_jumps_to_first_target() {
    let mut engine = TweenEngine::new();
    engine.ease_to(Channel::Opacity, 1.0, LINEAR_1S);
    assert_eq!(engine.value(Channel::Opacity), Some(1.0));
    assert_eq!(engine.active_count(), 0);
}

#[test]
fn zero_duration_completes_immediately() {
    let mut engine = TweenEngine::new();
    engine.snap(Channel::CursorY, 3.0);
    engine.ease_to(Channel::CursorY, 9.0, EaseProfile::new(0.0, Ease::OutQuad));
    assert_eq!(engine.value(Channel::CursorY), Some(9.0));
    assert!(!engine.is_animating(Channel::CursorY));
}

#[test]
fn snap_discards_running_tween() {
    let mut engine = TweenEngine::new();
    engine.snap(Channel::CursorX, 0.0);
    engine.ease_to(Channel::CursorX, 50.0, LINEAR_1S);
    engine.snap(Channel::CursorX, 7.0);
    engine.advance(0.5);
    assert_eq!(engine.value(Channel::CursorX), Some(7.0));
}

#[test]
fn cancel_all_freezes_displayed_values() {
    let mut engine = TweenEngine::new();
    engine.snap(Channel::Opacity, 0.0);
    engine.ease_to(Channel::Opacity, 1.0, LINEAR_1S);
    engine.advance(0.5);
    engine.cancel_all();
    engine.advance(1.0);
    assert!((engine.value(Channel::Opacity).unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(engine.active_count(), 0);
    assert!((engine.clock_s() - 1.5).abs() < 1e-12);
}

#[test]
fn non_positive_steps_are_ignored() {
    let mut engine = TweenEngine::new();
    engine.snap(Channel::CursorX, 0.0);
    engine.ease_to(Channel::CursorX, 1.0, LINEAR_1S);
    engine.advance(0.0);
    engine.advance(-1.0);
    engine.advance(f64::NAN);
    assert_eq!(engine.value(Channel::CursorX), Some(0.0));
    assert_eq!(engine.clock_s(), 0.0);
}
