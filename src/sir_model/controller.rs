use{
    serde::{Serialize, Deserialize},
    rand::Rng,
    rand_pcg::Pcg64,
    crate::{
        error::SimError,
        layout::LayoutOptions,
        misc_types::*,
    },
    super::*,
};

/// Full parameter set of one simulation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig{
    pub system_size: usize,
    pub average_degree: usize,
    pub initial_infected: usize,
    /// chance in percent that an infectious node infects a susceptible neighbour per day
    pub spread_chance_percent: f64,
    pub long_condition_prob: f64,
    pub duration: DurationDistribution,
}

impl Default for SimulationConfig{
    fn default() -> Self {
        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            average_degree: DEFAULT_AVERAGE_DEGREE,
            initial_infected: DEFAULT_INITIAL_INFECTED,
            spread_chance_percent: DEFAULT_SPREAD_CHANCE,
            long_condition_prob: DEFAULT_LONG_CONDITION_PROB,
            duration: DurationDistribution::default()
        }
    }
}

impl SimulationConfig{
    pub fn graph_options(&self) -> SWOptions
    {
        SWOptions::new(self.system_size, self.average_degree, self.initial_infected)
    }

    /// true if switching to `other` requires a new network
    pub fn topology_differs(&self, other: &Self) -> bool
    {
        self.graph_options() != other.graph_options()
    }

    pub fn validate(&self) -> Result<DurationSampler, SimError>
    {
        if !(0.0..=100.0).contains(&self.spread_chance_percent) {
            return Err(SimError::invalid(format!(
                "spread chance has to be in [0, 100] percent, got {}",
                self.spread_chance_percent
            )));
        }
        if !(0.0..=1.0).contains(&self.long_condition_prob) {
            return Err(SimError::invalid(format!(
                "long condition probability has to be in [0, 1], got {}",
                self.long_condition_prob
            )));
        }
        self.duration.sampler()
    }
}

/// One row of the per-day history
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyRecord{
    pub day: usize,
    pub susceptible: u32,
    pub infected: u32,
    pub immune: u32,
    pub long_condition: u32,
}

impl DailyRecord{
    pub fn new(day: usize, counts: StatusCounts) -> Self
    {
        Self{
            day,
            susceptible: counts.susceptible,
            infected: counts.infected,
            immune: counts.immune,
            long_condition: counts.long_condition
        }
    }

    pub fn counts(&self) -> StatusCounts
    {
        StatusCounts{
            susceptible: self.susceptible,
            infected: self.infected,
            immune: self.immune,
            long_condition: self.long_condition
        }
    }
}

/// Owns the one network of a simulation and everything that changes with it.
///
/// Rendering only ever gets shared references ([`Self::graph`]), all mutation
/// goes through `&mut self`, so a step can never overlap with another step or
/// with a read. The random source is injected, a seeded one makes runs replayable.
pub struct SimulationController<R = Pcg64>{
    config: SimulationConfig,
    durations: DurationSampler,
    graph: SmallWorldGraph,
    clusters: ClusterMap,
    stepper: EpidemicStepper,
    day: usize,
    running: bool,
    history: Vec<DailyRecord>,
    /// `None` until a layout is requested, the nodes then stay on the initial circle
    layout_type: Option<LayoutType>,
    layout_options: LayoutOptions,
    rng: R,
}

impl<R> SimulationController<R>
where R: Rng
{
    pub fn new(config: SimulationConfig, rng: R) -> Result<Self, SimError>
    {
        let durations = config.validate()?;
        let mut controller = Self{
            config,
            durations,
            graph: SmallWorldGraph::from_edges(0, &[]),
            clusters: ClusterMap::default(),
            stepper: EpidemicStepper::new(),
            day: 0,
            running: false,
            history: Vec::new(),
            layout_type: None,
            layout_options: LayoutOptions::default(),
            rng
        };
        controller.reset();
        Ok(controller)
    }

    pub fn with_layout(mut self, layout_type: LayoutType, options: LayoutOptions) -> Self
    {
        self.layout_options = options;
        self.relayout(layout_type);
        self
    }

    /// Throws the network away and builds a new one from the current config.
    /// Day goes back to 0 and the simulation is paused.
    /// The new network is only laid out if a layout was requested before.
    pub fn reset(&mut self)
    {
        self.running = false;
        self.day = 0;
        self.graph = SmallWorldGraph::build(
            &self.config.graph_options(),
            &self.durations,
            &mut self.rng
        );
        self.clusters = ClusterMap::new(&self.graph);
        if let Some(layout_type) = self.layout_type {
            self.relayout(layout_type);
        }
        self.history.clear();
        self.history.push(DailyRecord::new(0, self.graph.counts()));
        log::debug!(
            "reset: {} nodes, {} edges, {} clusters",
            self.graph.vertex_count(),
            self.graph.edge_count(),
            self.clusters.len()
        );
    }

    /// Switches to a new config. Only a change of the network parameters
    /// (size, degree, initially infected) rebuilds the network, returns
    /// whether that happened. Other changes apply from the next step on.
    pub fn reconfigure(&mut self, config: SimulationConfig) -> Result<bool, SimError>
    {
        let durations = config.validate()?;
        let rebuild = self.config.topology_differs(&config);
        self.config = config;
        self.durations = durations;
        if rebuild {
            log::info!("network parameters changed, rebuilding");
            self.reset();
        }
        Ok(rebuild)
    }

    pub fn play(&mut self)
    {
        self.running = true;
    }

    pub fn pause(&mut self)
    {
        self.running = false;
    }

    pub fn toggle(&mut self)
    {
        self.running = !self.running;
    }

    pub fn is_running(&self) -> bool
    {
        self.running
    }

    /// Called by the external timer, steps only while running
    pub fn tick(&mut self) -> Option<StepOutcome>
    {
        if self.running {
            Some(self.step())
        } else {
            None
        }
    }

    /// Simulates the current day, regardless of the running flag
    pub fn step(&mut self) -> StepOutcome
    {
        let outcome = self.stepper.step(
            &mut self.graph,
            self.day,
            self.config.spread_chance_percent,
            self.config.long_condition_prob,
            &self.durations,
            &mut self.rng
        );
        self.day = outcome.next_day;
        self.history.push(DailyRecord::new(self.day, self.graph.counts()));
        outcome
    }

    /// no infected node left, statuses can't change anymore
    pub fn is_settled(&self) -> bool
    {
        self.graph.infected_count() == 0
    }

    /// Steps until [`Self::is_settled`] or until `max_days` steps were done.
    /// Returns the number of steps.
    pub fn run_until_fixed_point(&mut self, max_days: usize) -> usize
    {
        let mut steps = 0;
        while steps < max_days && !self.is_settled(){
            self.step();
            steps += 1;
        }
        if !self.is_settled() {
            log::warn!("still {} infected after {max_days} days", self.graph.infected_count());
        }
        steps
    }

    /// Recomputes the positions, disease state stays untouched.
    /// The force layout continues from the current positions.
    /// The layout is kept and reapplied whenever the network is rebuilt.
    pub fn relayout(&mut self, layout_type: LayoutType)
    {
        self.layout_type = Some(layout_type);
        let positions = self.layout_options.layout(&self.graph, layout_type, None);
        self.graph.set_positions(&positions);
    }

    pub fn graph(&self) -> &SmallWorldGraph
    {
        &self.graph
    }

    pub fn clusters(&self) -> &ClusterMap
    {
        &self.clusters
    }

    pub fn config(&self) -> &SimulationConfig
    {
        &self.config
    }

    pub fn day(&self) -> usize
    {
        self.day
    }

    pub fn counts(&self) -> StatusCounts
    {
        self.graph.counts()
    }

    /// counts after every day, starting with day 0
    pub fn history(&self) -> &[DailyRecord]
    {
        &self.history
    }

    pub fn layout_type(&self) -> Option<LayoutType>
    {
        self.layout_type
    }

    /// largest number of simultaneously infected nodes and the day it was reached
    pub fn peak(&self) -> (u32, usize)
    {
        self.history.iter()
            .fold((0, 0), |(max, max_day), r| {
                if r.infected > max {
                    (r.infected, r.day)
                } else {
                    (max, max_day)
                }
            })
    }
}
