use{
    super::*,
    crate::{indication_bar, sir_model::*},
    crate::error::SimError,
    serde_json::Value,
    std::time::Duration,
    rand_pcg::Pcg64,
    rand::SeedableRng,
};

pub fn run_simulation(param: TimeGraphParams, json: Value) -> Result<(), SimError>
{
    log::info!("parameters: {json}");
    let rng = Pcg64::seed_from_u64(param.sir_seed);
    let mut controller = SimulationController::new(param.config.clone(), rng)?;

    let days = if param.tick_ms > 0 {
        play_back(&mut controller, &param)
    } else {
        controller.run_until_fixed_point(param.max_days)
    };

    let counts = controller.counts();
    let (peak, peak_day) = controller.peak();
    log::info!(
        "{days} days: susceptible {} infected {} immune {} long condition {}; peak of {peak} infected on day {peak_day}",
        counts.susceptible,
        counts.infected,
        counts.immune,
        counts.long_condition
    );

    history_to_file(controller.history(), param.name("csv"))
}

/// Real time version: the controller is ticked every `tick_ms` milliseconds
/// until the epidemic is over or `max_days` is reached
fn play_back(controller: &mut SimulationController, param: &TimeGraphParams) -> usize
{
    let interval = Duration::from_millis(param.tick_ms);
    let bar = indication_bar(param.max_days as u64);
    let start_day = controller.day();

    controller.play();
    while controller.is_running(){
        if controller.is_settled() || controller.day() - start_day >= param.max_days {
            controller.pause();
            break;
        }
        std::thread::sleep(interval);
        if let Some(outcome) = controller.tick(){
            let counts = controller.counts();
            bar.inc(1);
            bar.set_message(&format!(
                "day {} infected {:.1}%",
                outcome.next_day,
                counts.infected_fraction() * 100.0
            ));
        }
    }
    bar.finish_with_message("Done");
    controller.day() - start_day
}
