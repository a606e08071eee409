use anyhow::Context;
use crossbeam_channel::unbounded;
use life_engine::{HostConfig, Runner, Simulation};
use std::time::Duration;
use tracing::info;

/// Generations to run before the headless host shuts down
const GENERATIONS: usize = 50;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_new("life_engine=debug")
                    .context("invalid log filter")?,
            ),
    )
    .context("failed to install tracing subscriber")?;

    let config = HostConfig::default();
    let mut simulation = Simulation::from_config(&config).context("invalid host config")?;
    simulation.randomize();

    let (rows, cols) = simulation.engine().dimensions();
    info!(rows, cols, population = simulation.engine().population(), "seeded board");

    let (frame_tx, frame_rx) = unbounded();
    let runner = Runner::spawn(simulation, move |frame| {
        let _ = frame_tx.send(frame);
    });

    // Wait well past the tick interval before giving up on a frame
    let patience = config.interval() * 10 + Duration::from_secs(1);
    for _ in 0..GENERATIONS {
        let frame = frame_rx
            .recv_timeout(patience)
            .context("simulation stopped producing frames")?;
        info!(generation = frame.generation, live = frame.live_cells.len(), "frame");
    }

    let simulation = runner.stop()?;
    info!(
        generation = simulation.generation(),
        population = simulation.engine().population(),
        last_step_ms = simulation.last_step_time_ms,
        "done"
    );
    Ok(())
}
