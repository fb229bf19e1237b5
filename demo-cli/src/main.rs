//! Drops the reference 10x10 body and writes its trajectory to
//! `soft_sim.dat` for playback.

use softfall::{SimConfig, SimError, Simulation, TrajectoryWriter};

fn main() -> Result<(), SimError> {
    let config: SimConfig<f32> = SimConfig::new();
    let (width, height, frames) = (config.width, config.height, config.frames);

    let mut sim = Simulation::new(config)?;
    let mut writer = TrajectoryWriter::create("soft_sim.dat", width, height, frames)?;
    sim.run(&mut writer)?;
    writer.finish()?;
    Ok(())
}
