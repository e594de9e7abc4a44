use std::f64::consts::TAU;
use std::io::Write;

use log::{debug, trace};

use crate::{
    error::{GenError, GenResult},
    random::UniformSource,
    sample::{format_scale_factor, Sample},
};

pub struct SampleGenerator<R> {
    rng: R,
}

impl<R: UniformSource> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Lazily draws `count` fresh samples from the generator's source.
    pub fn generate(&mut self, count: u64) -> Samples<'_, R> {
        Samples {
            rng: &mut self.rng,
            remaining: count,
        }
    }

    /// Writes every sample and the final scale factor to `out`, returning the factor.
    ///
    /// Nothing is written after the sample lines if the densities sum to zero.
    pub fn run<W: Write>(&mut self, count: u64, out: &mut W) -> GenResult<f64> {
        let total = self.generate(count).try_fold(0.0, |total, sample| {
            trace!("{:?}", sample.as_vec3());
            writeln!(out, "{}", sample)?;
            Ok::<_, GenError>(total + sample.z())
        })?;
        debug!("density sum over {} samples: {}", count, total);

        let factor = scale_factor(total)?;
        debug!("scale factor: {}", factor);
        writeln!(out, "{}", format_scale_factor(factor))?;
        out.flush()?;
        Ok(factor)
    }
}

/// Finite sequence of samples produced by [`SampleGenerator::generate`].
pub struct Samples<'a, R> {
    rng: &'a mut R,
    remaining: u64,
}

impl<R: UniformSource> Iterator for Samples<'_, R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let r = self.rng.sample();
        let theta = TAU * self.rng.sample();
        Some(Sample::from_polar(r, theta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

pub fn scale_factor(total: f64) -> GenResult<f64> {
    if total == 0.0 {
        return Err(GenError::DivisionByZero);
    }
    Ok(1.0 / total)
}
