use{
    std::collections::HashSet,
    serde::{Serialize, Deserialize},
    rand::Rng,
    crate::layout::{circle_positions, Position, INITIAL_RADIUS},
    super::*,
};

/// One simulated agent of the contact network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent{
    id: usize,
    state: InfectionState,
    infected_on_day: Option<usize>,
    infection_duration: u32,
    neighbors: Vec<usize>,
    pub position: Position,
}

impl Agent{
    fn new(id: usize, position: Position) -> Self
    {
        Self{
            id,
            state: InfectionState::Susceptible,
            infected_on_day: None,
            infection_duration: 0,
            neighbors: Vec::new(),
            position
        }
    }

    pub fn id(&self) -> usize
    {
        self.id
    }

    pub fn state(&self) -> InfectionState
    {
        self.state
    }

    /// Day of the most recent infection, `None` if never infected
    pub fn infected_on_day(&self) -> Option<usize>
    {
        self.infected_on_day
    }

    /// Same as [`Self::infected_on_day`], with `-1` for never infected
    pub fn infected_on_day_or_neg(&self) -> i64
    {
        self.infected_on_day.map_or(-1, |d| d as i64)
    }

    pub fn infection_duration(&self) -> u32
    {
        self.infection_duration
    }

    pub fn neighbors(&self) -> &[usize]
    {
        &self.neighbors
    }

    pub fn degree(&self) -> usize
    {
        self.neighbors.len()
    }
}

/// Undirected contact link. `source` and `target` are stored in the
/// order the edge was created, the pair itself is unordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge{
    pub source: usize,
    pub target: usize,
}

impl Edge{
    /// ordered representation, usable as set key
    pub fn key(&self) -> (usize, usize)
    {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// The contact network. The topology never changes after construction,
/// only the disease related fields of the agents (and their positions) do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmallWorldGraph{
    agents: Vec<Agent>,
    edges: Vec<Edge>,
}

impl SmallWorldGraph{

    /// Builds the ring lattice: node `i` links to `(i + j) mod N` for
    /// `j = 1..=hops`. The first `min(m, N)` nodes start infected on day 0.
    pub fn build<R>(options: &SWOptions, durations: &DurationSampler, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        let n = options.system_size;
        let hops = options.hops();
        let mut pairs = Vec::with_capacity(n * hops);
        for i in 0..n{
            for j in 1..=hops{
                pairs.push((i, (i + j) % n));
            }
        }
        let mut graph = Self::from_edges(n, &pairs);

        for index in 0..options.clamped_initial_infected(){
            let duration = durations.sample(rng);
            graph.infect(index, 0, duration);
        }
        log::debug!(
            "built ring lattice: {} nodes, {} edges, {} infected",
            graph.vertex_count(),
            graph.edge_count(),
            options.clamped_initial_infected()
        );
        graph
    }

    /// All nodes susceptible. Self loops and pairs that already exist
    /// are skipped, indices out of range are ignored.
    pub fn from_edges(system_size: usize, pairs: &[(usize, usize)]) -> Self
    {
        let mut agents: Vec<_> = circle_positions(system_size, INITIAL_RADIUS)
            .into_iter()
            .enumerate()
            .map(|(id, position)| Agent::new(id, position))
            .collect();

        let mut seen = HashSet::with_capacity(pairs.len());
        let mut edges = Vec::with_capacity(pairs.len());
        for &(source, target) in pairs{
            if source == target || source >= system_size || target >= system_size {
                continue;
            }
            let edge = Edge{source, target};
            if seen.insert(edge.key()){
                agents[source].neighbors.push(target);
                agents[target].neighbors.push(source);
                edges.push(edge);
            }
        }

        Self{
            agents,
            edges
        }
    }

    /// Marks a node as infected on `day`
    pub fn infect(&mut self, index: usize, day: usize, duration: u32)
    {
        let agent = &mut self.agents[index];
        agent.state = InfectionState::Infected;
        agent.infected_on_day = Some(day);
        agent.infection_duration = duration;
    }

    pub(crate) fn resolve(&mut self, index: usize, state: InfectionState)
    {
        debug_assert!(state.is_resolved());
        debug_assert!(self.agents[index].state.inf_check());
        self.agents[index].state = state;
    }

    pub fn vertex_count(&self) -> usize
    {
        self.agents.len()
    }

    pub fn edge_count(&self) -> usize
    {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent]
    {
        &self.agents
    }

    pub fn at(&self, index: usize) -> &Agent
    {
        &self.agents[index]
    }

    pub fn edges(&self) -> &[Edge]
    {
        &self.edges
    }

    pub fn neighbors(&self, index: usize) -> &[usize]
    {
        &self.agents[index].neighbors
    }

    pub fn degree(&self, index: usize) -> Option<usize>
    {
        self.agents.get(index).map(Agent::degree)
    }

    pub fn contained_iter(&self) -> impl Iterator<Item = &InfectionState> + '_
    {
        self.agents.iter().map(|a| &a.state)
    }

    pub fn counts(&self) -> StatusCounts
    {
        StatusCounts::from_states(self.contained_iter())
    }

    pub fn infected_count(&self) -> usize
    {
        self.contained_iter().filter(|s| s.inf_check()).count()
    }

    pub fn positions(&self) -> Vec<Position>
    {
        self.agents.iter().map(|a| a.position).collect()
    }

    /// Overwrites the positions. Extra positions are ignored,
    /// nodes without a position keep their old one.
    pub fn set_positions(&mut self, positions: &[Position])
    {
        self.agents.iter_mut()
            .zip(positions)
            .for_each(|(agent, pos)| agent.position = *pos);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use crate::misc_types::*;

    fn default_sampler() -> DurationSampler
    {
        DurationDistribution::default().sampler().unwrap()
    }

    fn build(n: usize, k: usize, m: usize) -> SmallWorldGraph
    {
        let mut rng = Pcg64::seed_from_u64(DEFAULT_SIR_SEED);
        SmallWorldGraph::build(&SWOptions::new(n, k, m), &default_sampler(), &mut rng)
    }

    #[test]
    fn ten_nodes_degree_four()
    {
        let graph = build(10, 4, 2);
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 20);
        for i in 0..10{
            assert_eq!(graph.degree(i), Some(4));
            let agent = graph.at(i);
            if i < 2 {
                assert_eq!(agent.state(), InfectionState::Infected);
                assert_eq!(agent.infected_on_day(), Some(0));
                assert!((10..=14).contains(&agent.infection_duration()));
            } else {
                assert_eq!(agent.state(), InfectionState::Susceptible);
                assert_eq!(agent.infected_on_day_or_neg(), -1);
            }
        }
        let mut n = graph.neighbors(0).to_vec();
        n.sort_unstable();
        assert_eq!(n, vec![1, 2, 8, 9]);
    }

    #[test]
    fn odd_degree_rounds_down()
    {
        let graph = build(10, 5, 0);
        assert!((0..10).all(|i| graph.degree(i) == Some(4)));
    }

    #[test]
    fn single_node()
    {
        let graph = build(1, 0, 1);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.at(0).state().inf_check());
    }

    #[test]
    fn degenerate_parameters_do_not_panic()
    {
        let empty = build(0, 4, 3);
        assert!(empty.is_empty());
        assert_eq!(empty.edge_count(), 0);

        let isolated = build(5, 0, 1);
        assert_eq!(isolated.edge_count(), 0);

        let all = build(4, 2, 10);
        assert_eq!(all.infected_count(), 4);

        // k >= N collapses to the complete graph
        let complete = build(6, 50, 0);
        assert_eq!(complete.edge_count(), 15);
        assert!((0..6).all(|i| complete.degree(i) == Some(5)));

        let pair = build(2, 2, 0);
        assert_eq!(pair.edge_count(), 1);
    }

    #[test]
    fn adjacency_is_symmetric_without_loops_or_duplicates()
    {
        let graph = build(7, 6, 0);
        let mut keys = HashSet::new();
        for e in graph.edges(){
            assert_ne!(e.source, e.target);
            assert!(keys.insert(e.key()));
            assert!(graph.neighbors(e.source).contains(&e.target));
            assert!(graph.neighbors(e.target).contains(&e.source));
        }
        let degree_sum: usize = (0..7).filter_map(|i| graph.degree(i)).sum();
        assert_eq!(degree_sum, 2 * graph.edge_count());
    }

    #[test]
    fn from_edges_skips_invalid_pairs()
    {
        let graph = SmallWorldGraph::from_edges(3, &[(0, 1), (1, 0), (2, 2), (1, 7), (1, 2)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.counts().susceptible, 3);
    }

    #[test]
    fn initial_positions_on_circle()
    {
        let graph = build(8, 2, 0);
        for p in graph.positions(){
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - INITIAL_RADIUS).abs() < 1e-9);
        }
    }
}
