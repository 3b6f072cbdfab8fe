//! Algorithms operating on bezier segments
//!
//! - [arclen](arclen/index.html) - arc length integration and the length to parameter inversion

pub mod arclen;
