/// Easing curve applied to normalized tween progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Linear, slowed-down middle section with faster ends.
    ///
    /// `linear_ratio` is the share of the timeline spent in the linear section (`(0, 1]`),
    /// `power` how much the middle is slowed (`[0, 1]`).
    SlowMo {
        /// Share of progress covered by the linear middle.
        linear_ratio: f64,
        /// How much the middle section is slowed.
        power: f64,
    },
}

impl Ease {
    /// Map progress `t` through the curve. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::SlowMo {
                linear_ratio,
                power,
            } => slow_mo(t, linear_ratio, power),
        }
    }
}

fn slow_mo(t: f64, linear_ratio: f64, power: f64) -> f64 {
    // Endpoints are pinned; the segment math below only reaches them up to rounding.
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let ratio = linear_ratio.min(1.0);
    let pow = if ratio < 1.0 { power } else { 0.0 };
    let p1 = (1.0 - ratio) / 2.0;
    let p3 = p1 + ratio;

    let r = t + (0.5 - t) * pow;
    if t < p1 {
        let q = 1.0 - t / p1;
        r - q.powi(4) * r
    } else if t > p3 {
        let q = (t - p3) / p1;
        r + (t - r) * q.powi(4)
    } else {
        r
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
