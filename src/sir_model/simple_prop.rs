use{
    serde::{Serialize, Deserialize},
    rand::Rng,
    super::*,
};

/// What happened during one call of [`EpidemicStepper::step`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome{
    /// the day that was simulated
    pub day: usize,
    /// the day the next call has to simulate
    pub next_day: usize,
    pub new_infections: usize,
    pub resolved: usize,
    pub became_long_condition: usize,
}

impl StepOutcome{
    /// true if no status changed during the step
    pub fn is_quiet(&self) -> bool
    {
        self.new_infections == 0 && self.resolved == 0
    }
}

/// Advances the epidemic by one day.
///
/// Keeps the scratch lists between calls, so that they
/// do not need to be allocated again and again.
#[derive(Clone, Debug, Default)]
pub struct EpidemicStepper{
    new_infected_list: Vec<usize>,
    // node is already in new_infected_list
    pending: Vec<bool>,
}

impl EpidemicStepper{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Simulates `day`.
    ///
    /// Transmission is decided on the states at the start of the day:
    /// newly infected nodes are collected first and only infected after
    /// every infected node has been looked at. Order of the nodes therefore
    /// does not matter for who gets infected. Random numbers are drawn in
    /// a fixed order (node ids ascending, neighbours in adjacency order),
    /// which makes a run reproducible for a seeded `rng`.
    pub fn step<R>(
        &mut self,
        graph: &mut SmallWorldGraph,
        day: usize,
        spread_chance_percent: f64,
        long_condition_prob: f64,
        durations: &DurationSampler,
        rng: &mut R
    ) -> StepOutcome
    where R: Rng + ?Sized
    {
        debug_assert!(self.new_infected_list.is_empty());
        self.pending.clear();
        self.pending.resize(graph.vertex_count(), false);

        let spread_prob = spread_chance_percent / 100.0;
        let mut outcome = StepOutcome{
            day,
            next_day: day + 1,
            ..StepOutcome::default()
        };

        for index in 0..graph.vertex_count(){
            let agent = graph.at(index);
            if !agent.state().inf_check(){
                continue;
            }
            // an infection day in the future counts as "just infected"
            let elapsed = agent.infected_on_day()
                .map_or(0, |d| day.saturating_sub(d));

            if elapsed >= agent.infection_duration() as usize {
                let new_state = if rng.gen::<f64>() < long_condition_prob {
                    outcome.became_long_condition += 1;
                    InfectionState::LongCondition
                } else {
                    InfectionState::Immune
                };
                graph.resolve(index, new_state);
                outcome.resolved += 1;
            } else if elapsed >= 1 {
                for &n_index in agent.neighbors(){
                    if graph.at(n_index).state().sus_check()
                        && rng.gen::<f64>() < spread_prob
                        && !self.pending[n_index]
                    {
                        self.pending[n_index] = true;
                        self.new_infected_list.push(n_index);
                    }
                }
            }
        }

        outcome.new_infections = self.new_infected_list.len();
        for index in self.new_infected_list.drain(..){
            let duration = durations.sample(rng);
            graph.infect(index, day, duration);
        }
        outcome
    }
}

/// One day with a throwaway [`EpidemicStepper`], returns the next day.
pub fn step<R>(
    graph: &mut SmallWorldGraph,
    day: usize,
    spread_chance_percent: f64,
    long_condition_prob: f64,
    durations: &DurationSampler,
    rng: &mut R
) -> usize
where R: Rng + ?Sized
{
    EpidemicStepper::new()
        .step(graph, day, spread_chance_percent, long_condition_prob, durations, rng)
        .next_day
}
