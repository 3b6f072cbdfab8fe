//! Numeric constants shared by the arc length machinery.

/// Number of nodes of the Gauss-Legendre rule used to integrate the speed.
pub const QUADRATURE_ORDER: usize = 24;

/// Positive abscissae of the 24-point Gauss-Legendre rule on `[-1, 1]`.
///
/// The rule is symmetric: every node `x` has a mirror `-x` sharing its weight.
pub const GAUSS_LEGENDRE_ABSCISSAE: [f64; QUADRATURE_ORDER / 2] = [
    0.064_056_892_862_605_63,
    0.191_118_867_473_616_31,
    0.315_042_679_696_163_4,
    0.433_793_507_626_045_13,
    0.545_421_471_388_839_56,
    0.648_093_651_936_975_55,
    0.740_124_191_578_554_36,
    0.820_001_985_973_902_95,
    0.886_415_527_004_401_07,
    0.938_274_552_002_732_8,
    0.974_728_555_971_309_47,
    0.995_187_219_997_021_31,
];

/// Weights matching [`GAUSS_LEGENDRE_ABSCISSAE`] entry by entry.
pub const GAUSS_LEGENDRE_WEIGHTS: [f64; QUADRATURE_ORDER / 2] = [
    0.127_938_195_346_752_24,
    0.125_837_456_346_828_39,
    0.121_670_472_927_803_35,
    0.115_505_668_053_725_61,
    0.107_444_270_115_965_62,
    0.097_618_652_104_113_9,
    0.086_190_161_531_953_22,
    0.073_346_481_411_080_27,
    0.059_298_584_915_436_66,
    0.044_277_438_817_419_68,
    0.028_531_388_628_933_81,
    0.012_341_229_799_987_33,
];

/// Speed below which a velocity counts as zero when locating cusps, relative to the
/// summed length of the control polygon legs.
pub const STATIONARY_SPEED_TOLERANCE: f64 = 1e-9;

/// Residual below which an inverted length is accepted, relative to the total length
/// of the curve.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 1e-10;

/// Bracket width in `t` below which the inversion stops refining.
pub const DEFAULT_PARAMETER_TOLERANCE: f64 = 1e-14;

/// Iteration cap of the length-to-parameter search.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;
