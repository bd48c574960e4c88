use{
    serde::{Serialize, Deserialize},
    crate::misc_types::*,
};

/// Everything that determines the topology and the initial infections
/// of a [`SmallWorldGraph`](super::SmallWorldGraph).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SWOptions{
    pub system_size: usize,
    pub average_degree: usize,
    pub initial_infected: usize,
}

impl Default for SWOptions{
    fn default() -> Self {
        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            average_degree: DEFAULT_AVERAGE_DEGREE,
            initial_infected: DEFAULT_INITIAL_INFECTED
        }
    }
}

impl SWOptions{
    pub fn new(system_size: usize, average_degree: usize, initial_infected: usize) -> Self
    {
        Self{
            system_size,
            average_degree,
            initial_infected
        }
    }

    /// Number of ring neighbours every node links to in forward direction.
    ///
    /// `floor(k/2)`, but never more than half way around the ring.
    /// Beyond that every further hop only yields pairs that already exist.
    pub fn hops(&self) -> usize
    {
        (self.average_degree / 2).min(self.system_size / 2)
    }

    /// initially infected nodes, can't be more than there are nodes
    pub fn clamped_initial_infected(&self) -> usize
    {
        self.initial_infected.min(self.system_size)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn hops_are_clamped()
    {
        assert_eq!(SWOptions::new(10, 4, 0).hops(), 2);
        assert_eq!(SWOptions::new(10, 5, 0).hops(), 2);
        assert_eq!(SWOptions::new(10, 0, 0).hops(), 0);
        assert_eq!(SWOptions::new(4, 100, 0).hops(), 2);
        assert_eq!(SWOptions::new(1, 3, 0).hops(), 0);
        assert_eq!(SWOptions::new(0, 3, 0).hops(), 0);
    }

    #[test]
    fn initial_infected_clamped()
    {
        assert_eq!(SWOptions::new(3, 2, 10).clamped_initial_infected(), 3);
        assert_eq!(SWOptions::new(30, 2, 10).clamped_initial_infected(), 10);
    }
}
