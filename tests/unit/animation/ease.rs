use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::SlowMo {
        linear_ratio: 0.1,
        power: 0.4,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn slow_mo_is_linear_and_slower_in_the_middle() {
    let ease = Ease::SlowMo {
        linear_ratio: 0.1,
        power: 0.4,
    };
    assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
    let mid_step = ease.apply(0.52) - ease.apply(0.48);
    assert!((mid_step - 0.04 * 0.6).abs() < 1e-12);
}

#[test]
fn slow_mo_with_full_linear_ratio_is_linear() {
    let ease = Ease::SlowMo {
        linear_ratio: 1.0,
        power: 0.7,
    };
    for t in [0.1, 0.3, 0.6, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-12);
    }
}

#[test]
fn out_cubic_decelerates() {
    let first_half = Ease::OutCubic.apply(0.5);
    assert!(first_half > 0.5);
}
