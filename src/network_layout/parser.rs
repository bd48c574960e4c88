use std::fmt::Display;

use{
    structopt::StructOpt,
    crate::json_parsing::*,
    serde::{Serialize, Deserialize},
    crate::error::SimError,
    crate::misc_types::*,
    crate::layout::LayoutOptions,
    crate::sir_model::SimulationConfig,
};

#[derive(Debug, StructOpt, Clone)]
/// Node positions of the contact network, together with state and cluster
/// of every node after a given number of days
pub struct NetworkLayout{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,
}

impl NetworkLayout{
    pub fn execute(&self) -> Result<(), SimError>
    {
        match parse(self.json.as_ref())?{
            Some((opt, json)) => super::execute::run_simulation(opt, json),
            None => Ok(())
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NetworkLayoutParams{
    pub config: SimulationConfig,
    pub sir_seed: u64,
    pub layout: LayoutType,
    pub layout_options: LayoutOptions,
    /// days simulated before the positions are written
    pub days: usize,
}

impl Default for NetworkLayoutParams{
    fn default() -> Self{
        Self{
            config: SimulationConfig::default(),
            sir_seed: DEFAULT_SIR_SEED,
            layout: LayoutType::default(),
            layout_options: LayoutOptions::default(),
            days: 0
        }
    }
}

impl NetworkLayoutParams{
    pub fn name<E>(&self, file_ending: E) -> String where E: Display{
        let c = &self.config;
        format!(
            "ver{}Layout_{}_N{}_K{}_InInf{}_Day{}_SS{}.{}",
            crate::VERSION,
            self.layout.name(),
            c.system_size,
            c.average_degree,
            c.initial_infected,
            self.days,
            self.sir_seed,
            file_ending
        )
    }
}
