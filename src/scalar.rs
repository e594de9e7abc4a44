/// Standard deviation of the density evaluated at each sample.
pub const SIGMA: f64 = 0.5;

pub const EPSILON: f64 = 1e-9;
