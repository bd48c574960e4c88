use{
    std::{
        time::Instant
    },
    structopt::StructOpt,
    sir_network::{
        logging,
        SimError,
        time_graph,
        connectedcomponent,
        network_layout,
        simple_sampling,
    },
};

fn main() {
    let start_time = Instant::now();
    if let Err(e) = logging::init_logging(logging::level_from_env()){
        eprintln!("{e}");
    }
    let opt = CmdOption::from_args();
    let res: Result<(), SimError> = match opt{
        CmdOption::Simulate(o) => o.execute(),
        CmdOption::Clusters(o) => o.execute(),
        CmdOption::Layout(o) => o.execute(),
        CmdOption::Sweep(o) => o.execute(),
    };
    if let Err(e) = res {
        log::error!("{e}");
        std::process::exit(1);
    }
    log::info!("Execution took {}",humantime::format_duration(start_time.elapsed()))
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Epidemic spreading on a small-world contact network")]
pub enum CmdOption
{
    Simulate(time_graph::TimeGraph),
    Clusters(connectedcomponent::ConnectedComponent),
    Layout(network_layout::NetworkLayout),
    Sweep(simple_sampling::SimpleSampleScan),
}
