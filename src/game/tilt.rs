//! Ground Tilt Animation
//!
//! A fixed-duration there-and-back rotation. The angle follows
//! `peak * sin(pi * t / duration)`, so it eases out to the peak at half time
//! and eases back to zero at the end.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

/// Result of advancing the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    pub orientation: Quat,
    /// True on the one frame where the animation finished
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TiltAnimation {
    /// Orientation at rest (angle 0)
    pub base: Quat,
    /// World-space rotation axis
    pub axis: Vec3,
    pub from_angle: f32,
    pub to_angle: f32,
    pub duration: f32,
    elapsed: f32,
    finished: bool,
}

impl TiltAnimation {
    pub fn new(base: Quat, axis: Vec3, peak_angle: f32, duration: f32) -> Self {
        Self {
            base,
            axis: axis.normalize_or(Vec3::Z),
            from_angle: 0.0,
            to_angle: peak_angle,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
            finished: false,
        }
    }

    /// Fraction of the duration elapsed, in [0, 1].
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_active(&self) -> bool {
        !self.finished
    }

    pub fn angle(&self) -> f32 {
        let wave = (PI * self.progress()).sin().max(0.0);
        self.from_angle + (self.to_angle - self.from_angle) * wave
    }

    pub fn orientation(&self) -> Quat {
        if self.finished {
            return self.base;
        }
        (Quat::from_axis_angle(self.axis, self.angle()) * self.base).normalize()
    }

    pub fn advance(&mut self, dt: f32) -> TiltFrame {
        if self.finished {
            return TiltFrame {
                orientation: self.base,
                completed: false,
            };
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.finished = true;
            return TiltFrame {
                orientation: self.base,
                completed: true,
            };
        }
        TiltFrame {
            orientation: self.orientation(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_at_half_time() {
        let mut tilt = TiltAnimation::new(Quat::IDENTITY, Vec3::Z, 1.0, 2.0);
        tilt.advance(1.0);
        assert_relative_eq!(tilt.angle(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(tilt.progress(), 0.5);
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut tilt = TiltAnimation::new(Quat::IDENTITY, Vec3::Z, 0.5, 1.0);
        let mut completions = 0;
        for _ in 0..200 {
            if tilt.advance(1.0 / 60.0).completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(!tilt.is_active());
    }

    #[test]
    fn test_returns_to_base() {
        let base = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
        let mut tilt = TiltAnimation::new(base, Vec3::Z, 0.8, 0.5);
        let mut last = tilt.advance(0.1);
        assert!(last.orientation.angle_between(base) > 0.01);
        while !last.completed {
            last = tilt.advance(0.1);
        }
        assert_eq!(last.orientation, base);
    }

    #[test]
    fn test_zero_axis_falls_back() {
        let tilt = TiltAnimation::new(Quat::IDENTITY, Vec3::ZERO, 0.5, 1.0);
        assert_eq!(tilt.axis, Vec3::Z);
    }
}
