//! Colony search loop
//!
//! Every iteration samples the whole population, scores it, folds each ant
//! into the global best in ant order, then updates the pheromones. The run
//! always completes the configured number of iterations.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::colony::best::BestResult;
use crate::colony::config::AcoConfig;
use crate::colony::pheromone::PheromoneField;
use crate::diagnostics::{ColonyResult, IterationStats, RunStats};
use crate::error::AcoResult;
use crate::fitness::bearing::BearingObjective;
use crate::fitness::traits::Objective;
use crate::observation::ObservationSet;
use crate::params::bounds::MultiBounds;
use crate::params::vector::ParameterVector;
use crate::rng::{LcgStream, RandomStream};
use crate::sampler::{BiasedSampler, CandidateSampler, SamplingPolicy, UniformSampler};

/// Continuous ant colony optimizer
#[derive(Clone, Debug)]
pub struct AcoSolver {
    config: AcoConfig,
}

impl AcoSolver {
    /// Create a solver, rejecting invalid configurations
    pub fn new(config: AcoConfig) -> AcoResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Fit a trajectory to `observations`, drawing from `stream`
    ///
    /// Always runs sequentially so the stream is consumed in a single
    /// well-defined order.
    pub fn solve<S: RandomStream>(
        &self,
        observations: &ObservationSet,
        stream: &mut S,
    ) -> AcoResult<ColonyResult> {
        observations.validate()?;
        let objective = self.bearing_objective(observations);
        self.optimize(&objective, stream)
    }

    /// Fit a trajectory to `observations` from an integer seed
    ///
    /// Uses per-ant substreams on the rayon pool when `parallel` is set and
    /// the `parallel` feature is enabled, and a single [`LcgStream`]
    /// otherwise.
    pub fn solve_seeded(&self, observations: &ObservationSet, seed: u64) -> AcoResult<ColonyResult> {
        observations.validate()?;
        let objective = self.bearing_objective(observations);
        self.optimize_seeded(&objective, seed)
    }

    /// Minimize any objective, drawing from `stream`
    pub fn optimize<O, S>(&self, objective: &O, stream: &mut S) -> AcoResult<ColonyResult>
    where
        O: Objective,
        S: RandomStream,
    {
        match self.config.policy {
            SamplingPolicy::Uniform => self.optimize_with(objective, &UniformSampler, stream),
            SamplingPolicy::PheromoneBiased => {
                let sampler = BiasedSampler::new(self.config.epsilon);
                self.optimize_with(objective, &sampler, stream)
            }
        }
    }

    /// Minimize any objective from an integer seed
    pub fn optimize_seeded<O: Objective>(&self, objective: &O, seed: u64) -> AcoResult<ColonyResult> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return match self.config.policy {
                SamplingPolicy::Uniform => self.optimize_parallel(objective, &UniformSampler, seed),
                SamplingPolicy::PheromoneBiased => {
                    let sampler = BiasedSampler::new(self.config.epsilon);
                    self.optimize_parallel(objective, &sampler, seed)
                }
            };
        }

        self.optimize(objective, &mut LcgStream::new(seed))
    }

    /// Sequential loop with an explicit sampler
    pub fn optimize_with<O, C, S>(
        &self,
        objective: &O,
        sampler: &C,
        stream: &mut S,
    ) -> AcoResult<ColonyResult>
    where
        O: Objective,
        C: CandidateSampler,
        S: RandomStream,
    {
        let mut run = ColonyRun::start(&self.config)?;

        for _ in 0..self.config.iterations {
            let iteration_start = Instant::now();
            for _ in 0..self.config.population_size {
                let candidate = sampler.sample(&run.bounds, &run.pheromones, stream);
                let fitness = objective.evaluate(candidate.coefficients());
                run.absorb(&candidate, fitness);
            }
            run.finish_iteration(iteration_start);
        }

        Ok(run.into_result())
    }

    /// Parallel loop with an explicit sampler
    ///
    /// Ant `a` of iteration `i` draws from `substream(seed, i, a)`, and the
    /// scored ants are folded in ant order after the parallel phase, so the
    /// result does not depend on the number of threads.
    #[cfg(feature = "parallel")]
    pub fn optimize_parallel<O, C>(
        &self,
        objective: &O,
        sampler: &C,
        seed: u64,
    ) -> AcoResult<ColonyResult>
    where
        O: Objective,
        C: CandidateSampler,
    {
        let mut run = ColonyRun::start(&self.config)?;

        for iteration in 0..self.config.iterations {
            let iteration_start = Instant::now();
            let bounds = &run.bounds;
            let pheromones = &run.pheromones;

            let scored: Vec<(ParameterVector, f64)> = (0..self.config.population_size)
                .into_par_iter()
                .map(|ant| {
                    let mut stream = crate::rng::substream(seed, iteration as u64, ant as u64);
                    let candidate = sampler.sample(bounds, pheromones, &mut stream);
                    let fitness = objective.evaluate(candidate.coefficients());
                    (candidate, fitness)
                })
                .collect();

            for (candidate, fitness) in &scored {
                run.absorb(candidate, *fitness);
            }
            run.finish_iteration(iteration_start);
        }

        Ok(run.into_result())
    }

    fn bearing_objective<'a>(&self, observations: &'a ObservationSet) -> BearingObjective<'a> {
        BearingObjective::new(observations)
            .with_sampling_time(self.config.sampling_time)
            .with_atan_mode(self.config.atan_mode)
    }
}

/// Mutable state of one run
struct ColonyRun {
    bounds: MultiBounds,
    pheromones: PheromoneField,
    best: BestResult,
    stats: RunStats,
    fitnesses: Vec<f64>,
    evaluations: usize,
    iteration: usize,
    iterations: usize,
    evaporation_rate: f64,
    started: Instant,
}

impl ColonyRun {
    fn start(config: &AcoConfig) -> AcoResult<Self> {
        config.validate()?;
        let bounds = config.search_bounds()?;

        info!(
            dimensions = config.dimensions,
            ants = config.population_size,
            iterations = config.iterations,
            policy = %config.policy,
            parallel = config.parallel,
            "Starting colony run"
        );

        Ok(Self {
            pheromones: PheromoneField::new(bounds.dimension()),
            bounds,
            best: BestResult::new(),
            stats: RunStats::new(),
            fitnesses: Vec::with_capacity(config.population_size),
            evaluations: 0,
            iteration: 0,
            iterations: config.iterations,
            evaporation_rate: config.evaporation_rate,
            started: Instant::now(),
        })
    }

    fn absorb(&mut self, candidate: &ParameterVector, fitness: f64) {
        self.best.offer(fitness, candidate);
        self.fitnesses.push(fitness);
        self.evaluations += 1;
    }

    fn finish_iteration(&mut self, iteration_start: Instant) {
        self.pheromones.update(self.evaporation_rate, &self.fitnesses);

        let stats = IterationStats::from_fitnesses(
            self.iteration,
            self.evaluations,
            self.best.fitness(),
            &self.fitnesses,
            self.pheromones.mean(),
        )
        .with_elapsed(iteration_start.elapsed());

        debug!(
            "Iteration {}/{} best fitness {}",
            self.iteration + 1,
            self.iterations,
            stats.best_fitness
        );

        self.stats.record(stats);
        self.fitnesses.clear();
        self.iteration += 1;
    }

    fn into_result(mut self) -> ColonyResult {
        self.stats.set_runtime(self.started.elapsed());
        let (best_fitness, best_solution) = self.best.into_parts();

        info!(
            best_fitness,
            evaluations = self.evaluations,
            elapsed_ms = self.stats.total_runtime_ms,
            "Colony run complete"
        );

        ColonyResult::new(best_solution, best_fitness, self.iteration, self.evaluations)
            .with_stats(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AcoError, ConfigError};
    use crate::fitness::traits::FnObjective;
    use crate::observation::Observation;
    use crate::params::bounds::Bounds;
    use crate::rng::RngStream;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> AcoConfig {
        AcoConfig::new().dimensions(4).population_size(8).iterations(25)
    }

    /// Target starting at (30000, 25000) with velocity (7, 6), observer fixed
    fn straight_track(n: usize) -> ObservationSet {
        let theta = [30000.0, 25000.0, 7.0, 6.0];
        (1..=n)
            .map(|i| {
                let t = 2.0 * i as f64;
                let (x, y) = BearingObjective::position_at(&theta, t);
                Observation::new(t, 0.0, 0.0, y.atan2(x))
            })
            .collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = AcoSolver::new(AcoConfig::new().dimensions(3)).unwrap_err();
        assert!(matches!(
            err,
            AcoError::Config(ConfigError::UnsupportedDimensions(3))
        ));
    }

    #[test]
    fn test_rejects_empty_observations_before_sampling() {
        struct Panicking;
        impl RandomStream for Panicking {
            fn next_unit(&mut self) -> f64 {
                panic!("stream must not be touched");
            }
        }

        let solver = AcoSolver::new(small_config()).unwrap();
        let err = solver.solve(&ObservationSet::new(), &mut Panicking).unwrap_err();
        assert!(matches!(err, AcoError::Config(ConfigError::EmptyObservations)));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let obs = straight_track(20);
        let solver = AcoSolver::new(small_config()).unwrap();
        let a = solver.solve_seeded(&obs, 7).unwrap();
        let b = solver.solve_seeded(&obs, 7).unwrap();
        assert_eq!(a.best_fitness, b.best_fitness);
        assert_eq!(a.best_solution, b.best_solution);
        assert_eq!(a.stats.best_fitness_history(), b.stats.best_fitness_history());
    }

    #[test]
    fn test_counts_and_history() {
        let obs = straight_track(10);
        let solver = AcoSolver::new(small_config()).unwrap();
        let result = solver.solve_seeded(&obs, 1).unwrap();

        assert_eq!(result.iterations, 25);
        assert_eq!(result.evaluations, 25 * 8);
        assert_eq!(result.stats.num_iterations(), 25);

        let history = result.stats.best_fitness_history();
        assert!(history.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(history.last().copied(), Some(result.best_fitness));
        assert!(result.best_fitness >= 0.0);
    }

    #[test]
    fn test_solution_within_bounds() {
        let obs = straight_track(10);
        let config = small_config();
        let bounds = config.search_bounds().unwrap();
        let solver = AcoSolver::new(config).unwrap();
        let result = solver.solve_seeded(&obs, 99).unwrap();
        let solution = result.best_solution.unwrap();
        assert!(bounds.contains_vec(solution.coefficients()));
    }

    #[test]
    fn test_first_ant_always_accepted() {
        let obs = straight_track(5);
        let solver = AcoSolver::new(small_config().iterations(1).population_size(1)).unwrap();
        let result = solver.solve_seeded(&obs, 3).unwrap();
        assert!(result.best_solution.is_some());
        assert!(result.best_fitness.is_finite());
    }

    #[test]
    fn test_matches_manual_replay_of_stream() {
        // One ant, one iteration, uniform policy: the solution is exactly the
        // first four draws mapped into the bounds.
        let bounds = MultiBounds::uniform(Bounds::new(0.0, 1.0), 4);
        let config = AcoConfig::new()
            .dimensions(4)
            .population_size(1)
            .iterations(1)
            .policy(SamplingPolicy::Uniform)
            .bounds(bounds);
        let solver = AcoSolver::new(config).unwrap();
        let objective = FnObjective::new(|x: &[f64]| x.iter().sum());
        let result = solver.optimize(&objective, &mut LcgStream::new(1)).unwrap();

        let mut replay = LcgStream::new(1);
        let expected: Vec<f64> = (0..4).map(|_| replay.next_unit()).collect();
        assert_eq!(result.best_solution.unwrap().coefficients(), expected.as_slice());
    }

    #[test]
    fn test_injected_rng_stream() {
        let obs = straight_track(10);
        let solver = AcoSolver::new(small_config()).unwrap();
        let a = solver
            .solve(&obs, &mut RngStream::new(StdRng::seed_from_u64(5)))
            .unwrap();
        let b = solver
            .solve(&obs, &mut RngStream::new(StdRng::seed_from_u64(5)))
            .unwrap();
        assert_eq!(a.best_solution, b.best_solution);
    }

    #[test]
    fn test_improves_on_sphere() {
        let config = AcoConfig::new()
            .dimensions(4)
            .population_size(20)
            .iterations(100)
            .policy(SamplingPolicy::Uniform)
            .bounds(MultiBounds::symmetric(5.0, 4));
        let solver = AcoSolver::new(config).unwrap();
        let sphere = FnObjective::new(|x: &[f64]| x.iter().map(|v| v * v).sum());
        let result = solver.optimize_seeded(&sphere, 11).unwrap();

        let history = result.stats.best_fitness_history();
        assert!(result.best_fitness <= history[0]);
        assert!(result.best_fitness < 5.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_independent_of_thread_count() {
        let obs = straight_track(15);
        let solver = AcoSolver::new(small_config().parallel(true)).unwrap();

        let run_on = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| solver.solve_seeded(&obs, 42).unwrap())
        };

        let one = run_on(1);
        let four = run_on(4);
        assert_eq!(one.best_fitness, four.best_fitness);
        assert_eq!(one.best_solution, four.best_solution);
        assert_eq!(
            one.stats.best_fitness_history(),
            four.stats.best_fitness_history()
        );
    }
}
