//! Wall-clock timing of the gravity sum and full steps for growing n.
//! Not a correctness tool; output is meant to be eyeballed or pasted into
//! a spreadsheet.

use std::time::Instant;

use crate::simulation::error::SimulationError;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Build a system of size `n`: a fixed heavy body at the origin plus
/// deterministic trig-scattered light bodies. No rand needed.
fn make_system(n: usize) -> System {
    let mut sys = System::new();
    sys.add_body(Body {
        x: NVec2::zeros(),
        v: NVec2::zeros(),
        m: 1000.0,
        radius: 20.0,
        color: "yellow".to_string(),
        fixed: true,
    });

    for i in 1..n {
        let i_f = i as f64;
        sys.add_body(Body {
            x: NVec2::new((i_f * 0.37).sin() * 400.0, (i_f * 0.13).cos() * 400.0),
            v: NVec2::new(-(i_f * 0.07).cos(), (i_f * 0.11).sin()),
            m: 10.0,
            radius: 10.0,
            color: "black".to_string(),
            fixed: false,
        });
    }
    sys
}

fn make_params() -> Parameters {
    Parameters {
        h0: 1.0,
        frames: 100,
        g: 1.0,
        size: 1000.0,
    }
}

/// Time one direct gravity accumulation at several system sizes.
pub fn bench_gravity() -> Result<(), SimulationError> {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let gravity = NewtonianGravity { g: params.g };

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out)?;

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out)?;
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity = {dt:8.6} s");
    }
    Ok(())
}

/// Time full Euler steps (gravity + kick + drift) at several system sizes.
pub fn bench_step() -> Result<(), SimulationError> {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 5;

    for n in ns {
        let mut sys = make_system(n);
        let params = make_params();
        let forces = AccelSet::new().with(NewtonianGravity { g: params.g });

        // Warm-up
        euler_integrator(&mut sys, &forces, &params)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &forces, &params)?;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
    Ok(())
}
