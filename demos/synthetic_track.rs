//! Synthetic Track Recovery
//!
//! Generates bearings to a target on a known constant-acceleration track,
//! seen from an ownship on a straight leg, then lets the colony recover the
//! track coefficients.
//!
//! The colony draws from an injected `StdRng` here; the CLI uses the
//! built-in seeded stream instead.

use bearing_aco::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Synthetic Track Recovery ===\n");

    // x0, y0, vx, vy, ax, ay
    let truth = [30000.0, 25000.0, 7.5, 6.0, 0.002, -0.004];
    let sampling_time = 2.0;

    let observations: ObservationSet = (1..=300)
        .map(|step| {
            let t = step as f64 * sampling_time;
            let (ox, oy) = (12.0 * t, 3.0 * t);
            let (px, py) = BearingObjective::position_at(&truth, t);
            Observation::new(t, ox, oy, (py - oy).atan2(px - ox))
        })
        .collect();

    let config = AcoConfig::new()
        .dimensions(6)
        .population_size(30)
        .iterations(400)
        .sampling_time(sampling_time);
    let solver = AcoSolver::new(config)?;

    let mut stream = RngStream::new(StdRng::seed_from_u64(42));
    let result = solver.solve(&observations, &mut stream)?;

    println!("Optimization complete!");
    println!("  Best fitness: {:.6}", result.best_fitness);
    println!("  Iterations:   {}", result.iterations);
    println!("  Evaluations:  {}", result.evaluations);

    if let Some(best) = &result.best_solution {
        println!("\nRecovered vs true coefficients:");
        for (i, (found, expected)) in best.coefficients().iter().zip(truth).enumerate() {
            println!("  theta[{}] = {:>14.6}  (true {:>12.6})", i, found, expected);
        }
    }

    println!("\n{}", result.stats.summary());

    Ok(())
}
