use crate::{
    error::{Result, VectorError},
    periodic::PeriodicBox,
    vector::Vector,
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{array, str::FromStr};

pub const PARTICLES: usize = 64;
pub const STEPS: usize = 100;
pub const BOX_SIZE: f64 = 10.0;
pub const STEP_SIZE: f64 = 0.25;
pub const SEED: u64 = 0xABBA;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub particles: usize,
    pub steps: usize,
    pub box_size: f64,
    pub step_size: f64,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particles: PARTICLES,
            steps: STEPS,
            box_size: BOX_SIZE,
            step_size: STEP_SIZE,
            seed: SEED,
        }
    }
}

impl SimConfig {
    /// Reads `particles steps box_size step_size seed` as optional positional arguments.
    /// Anything not given keeps its default.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(arg) = args.next() {
            config.particles = parse(arg.as_ref(), "particles")?;
        }
        if let Some(arg) = args.next() {
            config.steps = parse(arg.as_ref(), "steps")?;
        }
        if let Some(arg) = args.next() {
            config.box_size = parse(arg.as_ref(), "box_size")?;
        }
        if let Some(arg) = args.next() {
            config.step_size = parse(arg.as_ref(), "step_size")?;
        }
        if let Some(arg) = args.next() {
            config.seed = parse(arg.as_ref(), "seed")?;
        }
        if let Some(arg) = args.next() {
            return Err(VectorError::InvalidConfig(format!(
                "unexpected argument {:?}",
                arg.as_ref()
            )));
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.particles == 0 {
            return Err(VectorError::InvalidConfig(
                "at least one particle is required".to_string(),
            ));
        }
        if !(self.box_size.is_finite() && self.box_size > 0.) {
            return Err(VectorError::InvalidConfig(format!(
                "box_size must be positive, got {}",
                self.box_size
            )));
        }
        // a step longer than the box would need more than one wrap to resolve
        if !(self.step_size >= 0. && self.step_size < self.box_size) {
            return Err(VectorError::InvalidConfig(format!(
                "step_size must be in [0, {}), got {}",
                self.box_size, self.step_size
            )));
        }
        Ok(())
    }
}

fn parse<F: FromStr>(value: &str, name: &str) -> Result<F> {
    value
        .parse()
        .map_err(|_| VectorError::InvalidConfig(format!("{name}: cannot parse {value:?}")))
}

/// Random walk of point particles in a cubic periodic box.
pub struct Simulation<const N: usize> {
    config: SimConfig,
    domain: PeriodicBox<f64, N>,
    positions: Vec<Vector<f64, N>>,
    rng: StdRng,
    steps_taken: usize,
}

impl<const N: usize> Simulation<N> {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let mut rng: StdRng = SeedableRng::seed_from_u64(config.seed);
        let positions = (0..config.particles)
            .map(|_| Vector::new(array::from_fn(|_| rng.gen_range(0.0..config.box_size))))
            .collect();
        Self::build(config, positions, rng)
    }

    /// Starts from the given positions instead of random ones. Positions outside the box
    /// are wrapped into it.
    pub fn with_positions(config: SimConfig, positions: Vec<Vector<f64, N>>) -> Result<Self> {
        config.validate()?;
        let rng = SeedableRng::seed_from_u64(config.seed);
        Self::build(config, positions, rng)
    }

    fn build(config: SimConfig, positions: Vec<Vector<f64, N>>, rng: StdRng) -> Result<Self> {
        let domain = PeriodicBox::new(Vector::splat(config.box_size))?;
        let positions: Vec<_> = positions.into_iter().map(|p| domain.wrap(p)).collect();
        debug!(
            "{} particles in a {}-dimensional box of size {}",
            positions.len(),
            N,
            domain.size()
        );
        Ok(Self {
            config,
            domain,
            positions,
            rng,
            steps_taken: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn domain(&self) -> &PeriodicBox<f64, N> {
        &self.domain
    }

    pub fn positions(&self) -> &[Vector<f64, N>] {
        &self.positions
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Moves every particle by a uniform displacement in `[-step_size, step_size]` per axis.
    pub fn step(&mut self) {
        let Self {
            config,
            domain,
            positions,
            rng,
            ..
        } = self;
        let s = config.step_size;
        for p in positions.iter_mut() {
            let delta: Vector<f64, N> = array::from_fn(|_| rng.gen_range(-s..=s)).into();
            *p = domain.wrap(*p + delta);
        }
        self.steps_taken += 1;
    }

    pub fn run(&mut self) {
        for step in 0..self.config.steps {
            self.step();
            if step % 10 == 0 {
                debug!("step {step}: centroid {:?}", self.centroid());
            }
        }
        info!("finished {} steps", self.steps_taken);
    }

    /// Closest pair of particles under the minimum image convention, as `(i, j, distance)`.
    pub fn closest_pair(&self) -> Option<(usize, usize, f64)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, a) in self.positions.iter().enumerate() {
            for (j, b) in self.positions.iter().enumerate().skip(i + 1) {
                let d = self.domain.squared_distance(a, b);
                if best.map_or(true, |(_, _, best_d)| d < best_d) {
                    best = Some((i, j, d));
                }
            }
        }
        best.map(|(i, j, d)| (i, j, d.sqrt()))
    }

    /// Arithmetic mean of the positions. This ignores periodicity, so a cluster
    /// straddling a boundary averages toward the middle of the box.
    pub fn centroid(&self) -> Option<Vector<f64, N>> {
        if self.positions.is_empty() {
            return None;
        }
        let sum = self
            .positions
            .iter()
            .fold(Vector::zeroed(), |acc, &p| acc + p);
        Some(sum / self.positions.len() as f64)
    }
}
