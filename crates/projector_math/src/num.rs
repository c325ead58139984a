//! Numbers and numerics.

use nalgebra as na;
use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    Copy + nt::FloatConst + nt::FromPrimitive + nt::ToPrimitive + na::RealField + na::Scalar
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const NEG_TWO: Self;
    const ONE_HALF: Self;
    const DEGREES_PER_HALF_TURN: Self;
}

macro_rules! impl_float {
    ($f:ty) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const NEG_TWO: Self = -2.0;
            const ONE_HALF: Self = 0.5;
            const DEGREES_PER_HALF_TURN: Self = 180.0;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// Converts the given `f64` into the float type `F`.
pub fn convert_f64<F: Float>(value: f64) -> F {
    na::convert(value)
}
