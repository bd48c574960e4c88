//! Toy epidemic on a small-world contact network.
//!
//! [`sir_model`] holds the simulation itself (network construction, daily
//! step, clusters, the controller), [`layout`] the cosmetic node positions.
//! The remaining modules are the subcommands of the `sir_network` binary.

use indicatif::*;

pub mod error;
pub mod logging;
pub mod json_parsing;
pub mod misc_types;
pub mod stats_methods;
pub mod sir_model;
pub mod layout;

pub mod time_graph;
pub mod connectedcomponent;
pub mod network_layout;
pub mod simple_sampling;

pub use error::SimError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}
