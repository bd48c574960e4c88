use std::io::Write;

use{
    super::*,
    crate::sir_model::*,
    crate::error::SimError,
    serde_json::Value,
    rand_pcg::Pcg64,
    rand::SeedableRng,
};

/// Clusters of the ring lattice for one average degree
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentSummary{
    pub average_degree: usize,
    pub edges: usize,
    pub clusters: ClusterMap,
}

pub fn summarize(system_size: usize, average_degree: usize) -> ComponentSummary
{
    // nobody is infected, no random number is drawn
    let options = SWOptions::new(system_size, average_degree, 0);
    let durations = DurationSampler::Uniform{min: 1, spread: 0};
    let graph = SmallWorldGraph::build(&options, &durations, &mut Pcg64::seed_from_u64(0));
    ComponentSummary{
        average_degree,
        edges: graph.edge_count(),
        clusters: ClusterMap::new(&graph),
    }
}

pub fn run_simulation(param: ConnectedComponentParams, json: Value) -> Result<(), SimError>
{
    let summaries: Vec<_> = param.average_degrees.iter()
        .map(|&k| summarize(param.system_size, k))
        .collect();

    for s in summaries.iter(){
        log::info!(
            "k = {}: {} clusters, largest has {} nodes",
            s.average_degree,
            s.clusters.len(),
            s.clusters.largest().map_or(0, Cluster::len)
        );
    }

    let mut buf = create_dat_file(param.name("dat"), &[json])?;
    write_summaries(&summaries, param.list_members, &mut buf)?;
    buf.flush()?;
    Ok(())
}

pub fn write_summaries<W: Write>(
    summaries: &[ComponentSummary],
    list_members: bool,
    mut writer: W
) -> std::io::Result<()>
{
    writeln!(writer, "#average_degree edges num_clusters largest_cluster")?;
    for s in summaries{
        let largest = s.clusters.largest().map_or(0, Cluster::len);
        writeln!(writer, "{} {} {} {}", s.average_degree, s.edges, s.clusters.len(), largest)?;
    }

    if list_members {
        for s in summaries{
            writeln!(writer, "#members for average_degree {}: rank size ids", s.average_degree)?;
            for (rank, cluster) in s.clusters.clusters().iter().enumerate(){
                write!(writer, "{rank} {}", cluster.len())?;
                for id in cluster.members(){
                    write!(writer, " {id}")?;
                }
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn ring_lattice_components()
    {
        let isolated = summarize(12, 0);
        assert_eq!(isolated.edges, 0);
        assert_eq!(isolated.clusters.len(), 12);

        let ring = summarize(12, 2);
        assert_eq!(ring.edges, 12);
        assert_eq!(ring.clusters.len(), 1);
        assert_eq!(ring.clusters.largest().map(Cluster::len), Some(12));
    }

    #[test]
    fn summary_lines()
    {
        let summaries = vec![summarize(3, 0), summarize(3, 2)];
        let mut out = Vec::new();
        write_summaries(&summaries, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, vec![
            "#average_degree edges num_clusters largest_cluster",
            "0 0 3 1",
            "2 3 1 3",
            "#members for average_degree 0: rank size ids",
            "0 1 0",
            "1 1 1",
            "2 1 2",
            "#members for average_degree 2: rank size ids",
            "0 3 0 1 2",
        ]);
    }
}
