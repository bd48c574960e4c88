use std::fmt::Display;

use{
    structopt::StructOpt,
    crate::json_parsing::*,
    serde::{Serialize, Deserialize},
    crate::error::SimError,
    crate::misc_types::*,
    crate::sir_model::SimulationConfig,
};

#[derive(Debug, StructOpt, Clone)]
/// Run one epidemic and write the number of susceptible, infected,
/// immune and long condition agents of every day to a csv file
pub struct TimeGraph{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,
}

impl TimeGraph{
    pub fn execute(&self) -> Result<(), SimError>
    {
        match parse(self.json.as_ref())?{
            Some((opt, json)) => super::execute::run_simulation(opt, json),
            None => Ok(())
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimeGraphParams{
    pub config: SimulationConfig,
    pub sir_seed: u64,
    /// stop after this many days even if the epidemic is not over
    pub max_days: usize,
    /// milliseconds between two days, 0 runs as fast as possible
    pub tick_ms: u64,
}

impl Default for TimeGraphParams{
    fn default() -> Self{
        Self{
            config: SimulationConfig::default(),
            sir_seed: DEFAULT_SIR_SEED,
            max_days: DEFAULT_MAX_DAYS,
            tick_ms: 0
        }
    }
}

impl TimeGraphParams{
    pub fn name<E>(&self, file_ending: E) -> String where E: Display{
        let c = &self.config;
        format!(
            "ver{}TIMEGRAPH_N{}_K{}_InInf{}_Spread{}_Long{}_SS{}.{}",
            crate::VERSION,
            c.system_size,
            c.average_degree,
            c.initial_infected,
            c.spread_chance_percent,
            c.long_condition_prob,
            self.sir_seed,
            file_ending)
    }
}
