//! Easing curves for animation timing.
//!
//! Every curve maps a normalized time `t` (usually in `0.0..=1.0`) to a progress value, with
//! `f(0) = 0` and `f(1) = 1`. The `*_ease_in` curves start slow, the `*_ease_out` curves end slow,
//! and the `*_ease_in_out` curves do both: they run the "in" curve over the first half of the time
//! range and the "out" curve over the second half, meeting at `(0.5, 0.5)`.
//!
//! The Back, Elastic and Bounce families leave the `0.0..=1.0` range on purpose (overshoot).
//!
//! The free functions do not clamp their input. [`Easing`] names every curve and is convenient to
//! store in animation data; [`Easing::apply`] clamps `t` first.
//!
//! ```
//! use mathkit::ease::{self, Easing};
//!
//! assert_eq!(ease::quadratic_ease_in(0.5), 0.25);
//! assert_eq!(Easing::QuadraticIn.apply(0.5), 0.25);
//! assert_eq!(ease::ease(10.0, 20.0, 0.5, Easing::QuadraticIn), 12.5);
//! ```

use std::f64::consts::{FRAC_PI_2, PI};

use crate::Vector;

/// Runs `ease_in` over the first half of the time range and `ease_out` over the second half.
#[inline]
fn in_out(t: f64, ease_in: fn(f64) -> f64, ease_out: fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        0.5 * ease_in(2.0 * t)
    } else {
        0.5 * ease_out(2.0 * t - 1.0) + 0.5
    }
}

fn linear(t: f64) -> f64 {
    t
}

/// `t²`
pub fn quadratic_ease_in(t: f64) -> f64 {
    t * t
}

pub fn quadratic_ease_out(t: f64) -> f64 {
    -t * (t - 2.0)
}

pub fn quadratic_ease_in_out(t: f64) -> f64 {
    in_out(t, quadratic_ease_in, quadratic_ease_out)
}

/// `t³`
pub fn cubic_ease_in(t: f64) -> f64 {
    t * t * t
}

pub fn cubic_ease_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f + 1.0
}

pub fn cubic_ease_in_out(t: f64) -> f64 {
    in_out(t, cubic_ease_in, cubic_ease_out)
}

/// `t⁴`
pub fn quartic_ease_in(t: f64) -> f64 {
    t * t * t * t
}

pub fn quartic_ease_out(t: f64) -> f64 {
    let f = t - 1.0;
    1.0 - f * f * f * f
}

pub fn quartic_ease_in_out(t: f64) -> f64 {
    in_out(t, quartic_ease_in, quartic_ease_out)
}

/// `t⁵`
pub fn quintic_ease_in(t: f64) -> f64 {
    t * t * t * t * t
}

pub fn quintic_ease_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f * f * f + 1.0
}

/// Equals `16t⁵` on the first half.
pub fn quintic_ease_in_out(t: f64) -> f64 {
    in_out(t, quintic_ease_in, quintic_ease_out)
}

/// Quarter sine wave, shifted so that it starts flat.
pub fn sine_ease_in(t: f64) -> f64 {
    ((t - 1.0) * FRAC_PI_2).sin() + 1.0
}

/// Quarter sine wave.
pub fn sine_ease_out(t: f64) -> f64 {
    (t * FRAC_PI_2).sin()
}

/// Half cosine wave, `(1 - cos(tπ)) / 2`.
pub fn sine_ease_in_out(t: f64) -> f64 {
    in_out(t, sine_ease_in, sine_ease_out)
}

/// Quarter circle, shifted so that it starts flat.
pub fn circular_ease_in(t: f64) -> f64 {
    1.0 - (1.0 - t * t).sqrt()
}

/// Quarter circle.
pub fn circular_ease_out(t: f64) -> f64 {
    ((2.0 - t) * t).sqrt()
}

pub fn circular_ease_in_out(t: f64) -> f64 {
    in_out(t, circular_ease_in, circular_ease_out)
}

/// `2^(10(t - 1))`, pinned to exactly 0 at `t = 0`.
pub fn exponential_ease_in(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * (t - 1.0))
    }
}

/// `1 - 2^(-10t)`, pinned to exactly 1 at `t = 1`.
pub fn exponential_ease_out(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

pub fn exponential_ease_in_out(t: f64) -> f64 {
    in_out(t, exponential_ease_in, exponential_ease_out)
}

/// Damped sine wave growing towards the end (`sin(13π/2 · t) · 2^(10(t - 1))`).
pub fn elastic_ease_in(t: f64) -> f64 {
    (13.0 * FRAC_PI_2 * t).sin() * 2f64.powf(10.0 * (t - 1.0))
}

/// Damped sine wave settling at 1.
pub fn elastic_ease_out(t: f64) -> f64 {
    (-13.0 * FRAC_PI_2 * (t + 1.0)).sin() * 2f64.powf(-10.0 * t) + 1.0
}

pub fn elastic_ease_in_out(t: f64) -> f64 {
    in_out(t, elastic_ease_in, elastic_ease_out)
}

/// Pulls back below 0 before moving towards 1 (`t³ - t · sin(tπ)`).
pub fn back_ease_in(t: f64) -> f64 {
    t * t * t - t * (t * PI).sin()
}

/// Overshoots past 1 before settling.
pub fn back_ease_out(t: f64) -> f64 {
    1.0 - back_ease_in(1.0 - t)
}

pub fn back_ease_in_out(t: f64) -> f64 {
    in_out(t, back_ease_in, back_ease_out)
}

/// Bounces with decreasing height near the start, `1 - bounce_ease_out(1 - t)`.
pub fn bounce_ease_in(t: f64) -> f64 {
    1.0 - bounce_ease_out(1.0 - t)
}

/// Bounces with decreasing height near the end, like a ball dropped onto the floor.
///
/// Made of four parabolic arcs, each touching 1 at its ends.
pub fn bounce_ease_out(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

pub fn bounce_ease_in_out(t: f64) -> f64 {
    in_out(t, bounce_ease_in, bounce_ease_out)
}

/// Names one of the easing curves in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    SineIn,
    SineOut,
    SineInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Easing {
    /// Every curve, in declaration order.
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuarticIn,
        Easing::QuarticOut,
        Easing::QuarticInOut,
        Easing::QuinticIn,
        Easing::QuinticOut,
        Easing::QuinticInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::CircularIn,
        Easing::CircularOut,
        Easing::CircularInOut,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::ExponentialInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    /// Returns the function implementing this curve.
    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            Easing::Linear => linear,
            Easing::QuadraticIn => quadratic_ease_in,
            Easing::QuadraticOut => quadratic_ease_out,
            Easing::QuadraticInOut => quadratic_ease_in_out,
            Easing::CubicIn => cubic_ease_in,
            Easing::CubicOut => cubic_ease_out,
            Easing::CubicInOut => cubic_ease_in_out,
            Easing::QuarticIn => quartic_ease_in,
            Easing::QuarticOut => quartic_ease_out,
            Easing::QuarticInOut => quartic_ease_in_out,
            Easing::QuinticIn => quintic_ease_in,
            Easing::QuinticOut => quintic_ease_out,
            Easing::QuinticInOut => quintic_ease_in_out,
            Easing::SineIn => sine_ease_in,
            Easing::SineOut => sine_ease_out,
            Easing::SineInOut => sine_ease_in_out,
            Easing::CircularIn => circular_ease_in,
            Easing::CircularOut => circular_ease_out,
            Easing::CircularInOut => circular_ease_in_out,
            Easing::ExponentialIn => exponential_ease_in,
            Easing::ExponentialOut => exponential_ease_out,
            Easing::ExponentialInOut => exponential_ease_in_out,
            Easing::ElasticIn => elastic_ease_in,
            Easing::ElasticOut => elastic_ease_out,
            Easing::ElasticInOut => elastic_ease_in_out,
            Easing::BackIn => back_ease_in,
            Easing::BackOut => back_ease_out,
            Easing::BackInOut => back_ease_in_out,
            Easing::BounceIn => bounce_ease_in,
            Easing::BounceOut => bounce_ease_out,
            Easing::BounceInOut => bounce_ease_in_out,
        }
    }

    /// Applies the curve to `t`, clamped to `0.0..=1.0`.
    ///
    /// The result can still leave `0.0..=1.0` for the overshooting curves.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t.clamp(0.0, 1.0))
    }
}

/// Interpolates between `a` and `b`, with progress along the way shaped by `easing`.
#[inline]
pub fn ease(a: f64, b: f64, t: f64, easing: Easing) -> f64 {
    a + (b - a) * easing.apply(t)
}

/// Interpolates between the vectors `a` and `b`, with progress shaped by `easing`.
///
/// ```
/// use mathkit::{ease::{ease_vector, Easing}, vec2};
///
/// let p = ease_vector(vec2(0.0, 0.0), vec2(10.0, -10.0), 1.0, Easing::BounceOut);
/// assert_eq!(p, vec2(10.0, -10.0));
/// ```
#[inline]
pub fn ease_vector<const N: usize>(
    a: Vector<f64, N>,
    b: Vector<f64, N>,
    t: f64,
    easing: Easing,
) -> Vector<f64, N> {
    a.lerp(b, easing.apply(t))
}
