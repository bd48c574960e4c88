use std::fmt::Display;

use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    std::num::*,
    crate::misc_types::*,
    crate::json_parsing::*,
    crate::error::SimError,
    crate::sir_model::SimulationConfig,
};

#[derive(Debug, StructOpt, Clone)]
/// Run many independent epidemics on the same network parameters and
/// get mean and variance of their outcome
pub struct SimpleSampleScan
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Number of threads to use
    #[structopt(long)]
    num_threads: Option<NonZeroUsize>
}

impl SimpleSampleScan {
    pub fn execute(&self) -> Result<(), SimError>
    {
        match parse(self.json.as_ref())?{
            Some((param, json)) => super::execute::execute_sir(param, json, self.num_threads),
            None => Ok(())
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimpleSampleParam
{
    pub config: SimulationConfig,
    pub sir_seed: u64,
    pub samples: NonZeroUsize,
    /// a realization is stopped after this many days
    pub max_days: usize,
}

impl SimpleSampleParam
{
    pub fn quick_name<E>(
        &self,
        num_threads: Option<NonZeroUsize>,
        file_ending: E
    ) -> String
    where E: Display
    {
        let j = match num_threads
        {
            None => "".to_owned(),
            Some(v) => format!("j{}", v)
        };
        let c = &self.config;
        format!(
            "v{}SimpleSampling_N{}K{}InInf{}Spread{}Long{}Sam{}SS{}THR{}.{}",
            crate::VERSION,
            c.system_size,
            c.average_degree,
            c.initial_infected,
            c.spread_chance_percent,
            c.long_condition_prob,
            self.samples,
            self.sir_seed,
            j,
            file_ending
        )
    }
}

impl Default for SimpleSampleParam
{
    fn default() -> Self {
        Self{
            config: SimulationConfig::default(),
            sir_seed: DEFAULT_SIR_SEED,
            samples: DEFAULT_SAMPLES,
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}
