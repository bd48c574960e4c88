use{
    serde::{Serialize, Deserialize},
    super::*,
};

/// Maximal connected component, member ids in ascending order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster{
    members: Vec<usize>,
}

impl Cluster{
    pub fn members(&self) -> &[usize]
    {
        &self.members
    }

    pub fn len(&self) -> usize
    {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.members.is_empty()
    }

    pub fn smallest_id(&self) -> Option<usize>
    {
        self.members.first().copied()
    }

    pub fn contains(&self, id: usize) -> bool
    {
        self.members.binary_search(&id).is_ok()
    }
}

/// Connected components of the contact network, largest first,
/// equal sizes ordered by their smallest node id.
///
/// Iterative depth first search, every node is visited once.
/// Only depends on the topology, so it has to be recomputed only after a rebuild.
pub fn detect_clusters(graph: &SmallWorldGraph) -> Vec<Cluster>
{
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut stack = Vec::new();
    let mut clusters = Vec::new();

    for root in 0..n{
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(root);
        let mut members = Vec::new();
        while let Some(index) = stack.pop(){
            members.push(index);
            for &neighbor in graph.neighbors(index){
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }
        members.sort_unstable();
        clusters.push(Cluster{members});
    }

    clusters.sort_by(
        |a, b|
        b.len().cmp(&a.len())
            .then_with(|| a.smallest_id().cmp(&b.smallest_id()))
    );
    clusters
}

/// Clusters plus the reverse lookup node -> rank of its cluster,
/// e.g. for colouring nodes by cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterMap{
    clusters: Vec<Cluster>,
    rank_of: Vec<usize>,
}

impl ClusterMap{
    pub fn new(graph: &SmallWorldGraph) -> Self
    {
        let clusters = detect_clusters(graph);
        let mut rank_of = vec![0; graph.vertex_count()];
        for (rank, cluster) in clusters.iter().enumerate(){
            for &id in cluster.members(){
                rank_of[id] = rank;
            }
        }
        Self{
            clusters,
            rank_of
        }
    }

    pub fn clusters(&self) -> &[Cluster]
    {
        &self.clusters
    }

    pub fn len(&self) -> usize
    {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.clusters.is_empty()
    }

    /// rank of the cluster containing `node`, 0 is the largest
    pub fn cluster_of(&self, node: usize) -> Option<usize>
    {
        self.rank_of.get(node).copied()
    }

    pub fn largest(&self) -> Option<&Cluster>
    {
        self.clusters.first()
    }

    pub fn sizes(&self) -> Vec<usize>
    {
        self.clusters.iter().map(Cluster::len).collect()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use proptest::prelude::*;

    fn ring(n: usize, k: usize) -> SmallWorldGraph
    {
        let sampler = DurationDistribution::default().sampler().unwrap();
        let mut rng = Pcg64::seed_from_u64(0);
        SmallWorldGraph::build(&SWOptions::new(n, k, 0), &sampler, &mut rng)
    }

    #[test]
    fn ring_is_one_cluster()
    {
        let clusters = detect_clusters(&ring(25, 2));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members(), (0..25).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn no_edges_gives_singletons()
    {
        let clusters = detect_clusters(&ring(4, 0));
        assert_eq!(clusters.len(), 4);
        for (i, c) in clusters.iter().enumerate(){
            assert_eq!(c.members(), &[i]);
        }
        assert!(detect_clusters(&ring(0, 2)).is_empty());
    }

    #[test]
    fn ordered_by_size_then_smallest_id()
    {
        let graph = SmallWorldGraph::from_edges(
            9,
            &[(7, 8), (1, 4), (4, 6), (2, 3), (0, 5)]
        );
        let map = ClusterMap::new(&graph);
        let members: Vec<_> = map.clusters().iter()
            .map(|c| c.members().to_vec())
            .collect();
        assert_eq!(
            members,
            vec![vec![1, 4, 6], vec![0, 5], vec![2, 3], vec![7, 8]]
        );
        assert_eq!(map.sizes(), vec![3, 2, 2, 2]);
        assert_eq!(map.cluster_of(6), Some(0));
        assert_eq!(map.cluster_of(8), Some(3));
        assert_eq!(map.cluster_of(9), None);
        assert!(map.largest().unwrap().contains(4));
        assert!(!map.largest().unwrap().contains(5));
    }

    #[test]
    fn long_path_does_not_overflow()
    {
        let pairs: Vec<_> = (0..199_999).map(|i| (i, i + 1)).collect();
        let graph = SmallWorldGraph::from_edges(200_000, &pairs);
        let clusters = detect_clusters(&graph);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 200_000);
    }

    proptest! {
        #[test]
        fn clusters_partition_all_nodes(
            n in 1usize..80,
            pairs in proptest::collection::vec((0usize..80, 0usize..80), 0..120)
        ) {
            let graph = SmallWorldGraph::from_edges(n, &pairs);
            let clusters = detect_clusters(&graph);
            let mut seen = vec![0u32; n];
            for c in &clusters{
                prop_assert!(!c.is_empty());
                for &id in c.members(){
                    seen[id] += 1;
                }
            }
            prop_assert!(seen.iter().all(|&s| s == 1));

            // no edge between two different clusters
            let map = ClusterMap::new(&graph);
            for e in graph.edges(){
                prop_assert_eq!(map.cluster_of(e.source), map.cluster_of(e.target));
            }
            for pair in clusters.windows(2){
                prop_assert!(pair[0].len() >= pair[1].len());
            }
        }
    }
}
