use super::*;

fn hero_trace() -> Trace {
    Trace::from_json_str(include_str!("../../data/hero_trace.json")).unwrap()
}

fn fps10() -> Fps {
    Fps::new(10, 1).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn first_frame_snaps_cursor_and_starts_hidden() {
    let frames = replay(&hero_trace(), &MaskConfig::default(), fps10()).unwrap();
    let f0 = &frames[0];
    assert!(f0.mounted);
    assert_eq!((f0.cursor_x, f0.cursor_y), (100.0, 50.0));
    assert_eq!(f0.opacity, 0.0);
    assert_eq!(f0.mask_scale, 0.0);
    assert_eq!(f0.parallax_y, None);
}

#[test]
fn fade_and_scale_settle_after_their_durations() {
    let frames = replay(&hero_trace(), &MaskConfig::default(), fps10()).unwrap();
    assert!(frames[1].opacity > 0.0 && frames[1].opacity < 1.0);
    assert_eq!(frames[4].opacity, 1.0);
    assert_eq!(frames[4].mask_scale, 1.0);
}

#[test]
fn hover_grows_mask_and_leaving_restores_it() {
    let frames = replay(&hero_trace(), &MaskConfig::default(), fps10()).unwrap();
    // Hover starts at 0.5s; scale eases for 0.3s.
    assert!(frames[6].mask_scale > 1.0 && frames[6].mask_scale < 7.0);
    assert_eq!(frames[9].mask_scale, 7.0);
    assert!(approx(frames[9].style.size_px, 350.0));

    let last = frames.last().unwrap();
    assert_eq!(last.mask_scale, 1.0);
    assert_eq!(last.cursor_x, 130.0);
    assert_eq!(last.cursor_y, 270.0);
    assert!(approx(last.parallax_y.unwrap(), 80.0));
    assert_eq!(last.style.position, Point::new(105.0, 245.0));
}

#[test]
fn scroll_moves_cursor_without_pointer_motion() {
    let frames = replay(&hero_trace(), &MaskConfig::default(), fps10()).unwrap();
    assert_eq!(frames[9].cursor_y, 60.0);
    assert_eq!(frames[14].cursor_y, 260.0);
}

#[test]
fn unmount_freezes_outputs() {
    let mut trace = hero_trace();
    trace.events.truncate(2);
    trace.events.push(TimedEvent {
        at: 0.6,
        event: TraceEvent::Unmount,
    });
    trace.events.push(TimedEvent {
        at: 0.7,
        event: TraceEvent::PointerMove {
            x: 500.0,
            y: 500.0,
            target: None,
        },
    });

    let frames = replay(&trace, &MaskConfig::default(), fps10()).unwrap();
    let frozen = frames[6].clone();
    assert!(!frozen.mounted);
    for f in &frames[6..] {
        assert_eq!(f.cursor_x, frozen.cursor_x);
        assert_eq!(f.mask_scale, frozen.mask_scale);
    }
    assert!(frozen.mask_scale < 7.0);
}

#[test]
fn record_pushes_reports_mount_then_events() {
    let pushes = record_pushes(&hero_trace(), &MaskConfig::default()).unwrap();
    let at_zero = pushes.iter().filter(|p| p.at == 0.0).count();
    // 4 mount snaps, 2 cursor snaps, fade, scale, 2 cursor targets.
    assert_eq!(at_zero, 10);

    let hover: Vec<_> = pushes
        .iter()
        .filter(|p| p.at == 0.5 && p.push.channel() == Some(Channel::MaskScale))
        .collect();
    assert_eq!(hover.len(), 1);

    let scroll: Vec<_> = pushes.iter().filter(|p| p.at == 1.0).collect();
    // Mask cursor x/y plus parallax.
    assert_eq!(scroll.len(), 3);
}

#[test]
fn record_pushes_stops_after_unmount() {
    let mut trace = hero_trace();
    trace.events.insert(2, TimedEvent {
        at: 0.75,
        event: TraceEvent::Unmount,
    });
    let pushes = record_pushes(&trace, &MaskConfig::default()).unwrap();
    assert_eq!(pushes.last().unwrap().push, Push::CancelAll);
    assert!(pushes.iter().all(|p| p.at <= 0.75));
}

#[test]
fn remount_in_trace_replays_reveal() {
    let mut trace = hero_trace();
    trace.events.truncate(1);
    trace.events.push(TimedEvent {
        at: 0.2,
        event: TraceEvent::Unmount,
    });
    trace.events.push(TimedEvent {
        at: 0.3,
        event: TraceEvent::Mount,
    });
    trace.events.push(TimedEvent {
        at: 0.4,
        event: TraceEvent::PointerMove {
            x: 10.0,
            y: 10.0,
            target: None,
        },
    });
    let pushes = record_pushes(&trace, &MaskConfig::default()).unwrap();
    let fades = pushes
        .iter()
        .filter(|p| {
            matches!(
                p.push,
                Push::EaseTo {
                    channel: Channel::Opacity,
                    ..
                }
            )
        })
        .count();
    assert_eq!(fades, 2);
}

#[test]
fn unknown_target_is_rejected() {
    let mut trace = hero_trace();
    trace.events.push(TimedEvent {
        at: 2.0,
        event: TraceEvent::PointerMove {
            x: 0.0,
            y: 0.0,
            target: Some("ghost".to_owned()),
        },
    });
    let err = replay(&trace, &MaskConfig::default(), fps10()).unwrap_err();
    assert!(matches!(err, RevealError::Document(_)));
}

#[test]
fn out_of_order_timestamps_are_rejected() {
    let mut trace = hero_trace();
    trace.events[1].at = -1.0;
    assert!(matches!(
        record_pushes(&trace, &MaskConfig::default()),
        Err(RevealError::Validation(_))
    ));

    let mut trace = hero_trace();
    trace.events.swap(0, 3);
    assert!(matches!(
        record_pushes(&trace, &MaskConfig::default()),
        Err(RevealError::Validation(_))
    ));
}

#[test]
fn invalid_config_is_rejected_before_playback() {
    let cfg = MaskConfig {
        base_size: 0.0,
        ..MaskConfig::default()
    };
    assert!(replay(&hero_trace(), &cfg, fps10()).is_err());
}
