//! Angles in degrees or radians.

use crate::num::Float;
use approx::AbsDiffEq;

/// An angle that can be read in either unit, so that functions taking an
/// angle accept [`Degrees`] and [`Radians`] alike.
pub trait Angle<F>: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F {
        self.as_degrees().0
    }

    /// Returns the value of the angle in radians.
    fn radians(self) -> F {
        self.as_radians().0
    }
}

/// An angle in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radians<F>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    fn as_degrees(self) -> Degrees<F> {
        self
    }

    fn as_radians(self) -> Radians<F> {
        Radians(self.0 * F::PI() / F::DEGREES_PER_HALF_TURN)
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn as_degrees(self) -> Degrees<F> {
        Degrees(self.0 * F::DEGREES_PER_HALF_TURN * F::FRAC_1_PI())
    }

    fn as_radians(self) -> Radians<F> {
        self
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(angle: Radians<F>) -> Self {
        angle.as_degrees()
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(angle: Degrees<F>) -> Self {
        angle.as_radians()
    }
}

impl<F: Float> AbsDiffEq for Degrees<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<F: Float> AbsDiffEq for Radians<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}
