//! Arc length parameterization of bezier segments
//!
//! The arc length `L(t)` of a segment is the integral of its speed `|B'(u)|` over `[0, t]`.
//! [`quadrature`] evaluates it with a fixed-order Gauss-Legendre rule, and [`inverse`]
//! recovers the parameter `t` for a target length by searching the non-decreasing `L`.

pub mod inverse;
pub mod quadrature;

pub use inverse::{t_at_length, InversionSettings};
pub use quadrature::{arc_length, cubic_arc_length, quadratic_arc_length, segment_arc_length};
