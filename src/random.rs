use rand::{
    distributions::{Distribution, Uniform},
    prelude::ThreadRng,
};

/// Source of uniform floats in `[0, 1)`.
pub trait UniformSource {
    fn sample(&mut self) -> f64;
}

pub struct Random {
    uniform: Uniform<f64>,
    rng: ThreadRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            uniform: Uniform::new(0.0, 1.0),
            rng: rand::thread_rng(),
        }
    }
}

impl UniformSource for Random {
    fn sample(&mut self) -> f64 {
        self.uniform.sample(&mut self.rng)
    }
}
