use log::info;
use std::{env, process::ExitCode};
use vector_nd::{
    sim::{SimConfig, Simulation},
    Result,
};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = SimConfig::from_args(env::args().skip(1))?;
    info!("running {config:?}");

    let mut sim = Simulation::<3>::new(config)?;
    sim.run();

    match sim.closest_pair() {
        Some((i, j, d)) => {
            let positions = sim.positions();
            println!(
                "closest pair: #{i} at {:.3} and #{j} at {:.3}, distance {d:.4}",
                positions[i], positions[j]
            );
            println!(
                "displacement: {:.3}",
                sim.domain().displacement(&positions[i], &positions[j])
            );
        }
        None => println!("fewer than two particles, no pair to report"),
    }
    if let Some(centroid) = sim.centroid() {
        println!("centroid: {centroid:.3}");
    }
    Ok(())
}
