use std::fmt::Display;

use{
    structopt::StructOpt,
    crate::json_parsing::*,
    serde::{Serialize, Deserialize},
    crate::error::SimError,
    crate::misc_types::*,
};


#[derive(Debug, StructOpt, Clone)]
/// Connected components of the contact network, for every average degree given.
pub struct ConnectedComponent{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,
}

impl ConnectedComponent{
    pub fn execute(&self) -> Result<(), SimError>
    {
        match parse(self.json.as_ref())?{
            Some((opt, json)) => super::execute::run_simulation(opt, json),
            None => Ok(())
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConnectedComponentParams{
    pub system_size: usize,
    pub average_degrees: Vec<usize>,
    /// also write the ids of the nodes of every cluster
    pub list_members: bool,
}

impl Default for ConnectedComponentParams{
    fn default() -> Self{
        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            average_degrees: vec![0, 1, 2, 4, DEFAULT_AVERAGE_DEGREE],
            list_members: false,
        }
    }
}

impl ConnectedComponentParams{
    pub fn name<E>(&self, file_ending: E) -> String where E: Display{
        let degrees = self.average_degrees.iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join("-");
        format!(
            "ver{}ConnectedComponents_N{}_K{}.{}",
            crate::VERSION,
            self.system_size,
            degrees,
            file_ending
        )
    }
}
