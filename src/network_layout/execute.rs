use std::io::Write;

use{
    super::*,
    crate::sir_model::*,
    crate::error::SimError,
    serde_json::Value,
    rand_pcg::Pcg64,
    rand::SeedableRng,
};

pub fn run_simulation(param: NetworkLayoutParams, json: Value) -> Result<(), SimError>
{
    let controller = prepare(&param)?;
    let graph = controller.graph();
    log::info!(
        "{} layout of {} nodes and {} edges on day {}",
        param.layout.name(),
        graph.vertex_count(),
        graph.edge_count(),
        controller.day()
    );

    let mut buf = create_dat_file(param.name("dat"), &[json])?;
    write_nodes(&controller, &mut buf)?;
    buf.flush()?;
    Ok(())
}

/// Builds the network, runs `days` days and lays it out
pub fn prepare(param: &NetworkLayoutParams) -> Result<SimulationController, SimError>
{
    let rng = Pcg64::seed_from_u64(param.sir_seed);
    let mut controller = SimulationController::new(param.config.clone(), rng)?
        .with_layout(param.layout, param.layout_options);
    for _ in 0..param.days{
        controller.step();
    }
    Ok(controller)
}

/// `id x y state cluster_rank degree`, one line per node,
/// followed by the edge list `source target`
pub fn write_nodes<W: Write>(controller: &SimulationController, mut writer: W) -> std::io::Result<()>
{
    let graph = controller.graph();
    let clusters = controller.clusters();
    writeln!(writer, "#id x y state cluster degree")?;
    for agent in graph.agents(){
        writeln!(
            writer,
            "{} {} {} {} {} {}",
            agent.id(),
            agent.position.x,
            agent.position.y,
            agent.state().name(),
            clusters.cluster_of(agent.id()).unwrap_or(0),
            agent.degree()
        )?;
    }
    writeln!(writer, "#source target")?;
    for edge in graph.edges(){
        writeln!(writer, "{} {}", edge.source, edge.target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::misc_types::LayoutType;

    #[test]
    fn one_line_per_node_and_edge()
    {
        let param = NetworkLayoutParams{
            config: SimulationConfig{
                system_size: 6,
                average_degree: 2,
                initial_infected: 1,
                ..SimulationConfig::default()
            },
            layout: LayoutType::Grid,
            days: 3,
            ..NetworkLayoutParams::default()
        };
        let controller = prepare(&param).unwrap();
        assert_eq!(controller.day(), 3);
        assert_eq!(controller.layout_type(), Some(LayoutType::Grid));

        let mut out = Vec::new();
        write_nodes(&controller, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        // two comment lines, 6 nodes, 6 edges
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[1], "0 -0.75 -0.75 infected 0 2");
        assert_eq!(lines[7], "#source target");
        assert_eq!(lines[8], "0 1");
    }

    #[test]
    fn force_layout_is_one_relaxation_of_the_new_network()
    {
        let param = NetworkLayoutParams{
            config: SimulationConfig{
                system_size: 30,
                average_degree: 4,
                initial_infected: 2,
                ..SimulationConfig::default()
            },
            layout: LayoutType::Force,
            ..NetworkLayoutParams::default()
        };
        let controller = prepare(&param).unwrap();

        let sampler = param.config.duration.sampler().unwrap();
        let mut rng = Pcg64::seed_from_u64(param.sir_seed);
        let fresh = SmallWorldGraph::build(&param.config.graph_options(), &sampler, &mut rng);
        let expected = crate::layout::layout(&fresh, LayoutType::Force, None);
        assert_eq!(controller.graph().positions(), expected);
    }

    #[test]
    fn invalid_config_is_reported()
    {
        let mut param = NetworkLayoutParams::default();
        param.config.long_condition_prob = 2.0;
        assert!(matches!(prepare(&param), Err(SimError::InvalidParameter(_))));
    }
}
