//! 2-D coordinates for drawing the contact network.
//!
//! Nothing in here touches disease state: a layout only reads the topology
//! (and, for the force layout, previous positions).

use{
    std::f64::consts::PI,
    serde::{Serialize, Deserialize},
    crate::sir_model::SmallWorldGraph,
    crate::misc_types::LayoutType,
};

/// radius of the circle the nodes are placed on when a network is built
pub const INITIAL_RADIUS: f64 = 2.5;
pub const CIRCULAR_RADIUS: f64 = 3.0;
pub const GRID_SPACING: f64 = 0.5;

pub const FORCE_ITERATIONS: usize = 50;
pub const FORCE_REPULSION: f64 = 0.5;
pub const FORCE_ATTRACTION: f64 = 0.01;
pub const FORCE_STEP_SIZE: f64 = 0.1;
/// distance used instead of 0 for coinciding nodes
pub const FORCE_MIN_DISTANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position{
    pub x: f64,
    pub y: f64,
}

impl Position{
    pub fn new(x: f64, y: f64) -> Self
    {
        Self{x, y}
    }

    pub fn distance(&self, other: &Self) -> f64
    {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Parameters of the force directed relaxation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceParams{
    pub iterations: usize,
    pub repulsion: f64,
    pub attraction: f64,
    pub step_size: f64,
}

impl Default for ForceParams{
    fn default() -> Self {
        Self{
            iterations: FORCE_ITERATIONS,
            repulsion: FORCE_REPULSION,
            attraction: FORCE_ATTRACTION,
            step_size: FORCE_STEP_SIZE
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions{
    pub circular_radius: f64,
    pub grid_spacing: f64,
    pub force: ForceParams,
}

impl Default for LayoutOptions{
    fn default() -> Self {
        Self{
            circular_radius: CIRCULAR_RADIUS,
            grid_spacing: GRID_SPACING,
            force: ForceParams::default()
        }
    }
}

/// [`LayoutOptions::layout`] with default options
pub fn layout(graph: &SmallWorldGraph, mode: LayoutType, prior: Option<&[Position]>) -> Vec<Position>
{
    LayoutOptions::default().layout(graph, mode, prior)
}

impl LayoutOptions{

    /// Position of every node, indexed by node id.
    ///
    /// `prior` is only used by the force layout as starting point. If it is
    /// missing or has the wrong length, the positions stored in the graph are used.
    pub fn layout(
        &self,
        graph: &SmallWorldGraph,
        mode: LayoutType,
        prior: Option<&[Position]>
    ) -> Vec<Position>
    {
        let n = graph.vertex_count();
        match mode{
            LayoutType::Circular => circle_positions(n, self.circular_radius),
            LayoutType::Grid => grid_positions(n, self.grid_spacing),
            LayoutType::Force => {
                let mut positions = match prior{
                    Some(p) if p.len() == n => p.to_vec(),
                    _ => graph.positions()
                };
                self.force.relax(graph, &mut positions);
                positions
            }
        }
    }
}

pub fn circle_positions(n: usize, radius: f64) -> Vec<Position>
{
    (0..n).map(
        |idx|
        {
            let angle = idx as f64 / n as f64 * 2.0 * PI;
            Position::new(radius * angle.cos(), radius * angle.sin())
        }
    ).collect()
}

/// row major, `ceil(sqrt(n))` columns, centred around the origin
pub fn grid_positions(n: usize, spacing: f64) -> Vec<Position>
{
    let cols = (n as f64).sqrt().ceil().max(1.0) as usize;
    let half = cols as f64 / 2.0;
    (0..n).map(
        |idx|
        {
            let row = (idx / cols) as f64;
            let col = (idx % cols) as f64;
            Position::new((col - half) * spacing, (row - half) * spacing)
        }
    ).collect()
}

impl ForceParams{
    /// Fixed number of sweeps, no convergence check.
    /// Every sweep moves the nodes one after another in id order,
    /// so later nodes already see the new positions of earlier ones.
    /// O(N^2) per sweep, meant for small networks.
    pub fn relax(&self, graph: &SmallWorldGraph, positions: &mut [Position])
    {
        let n = positions.len().min(graph.vertex_count());
        for _ in 0..self.iterations{
            for node in 0..n{
                let p = positions[node];
                let mut fx = 0.0;
                let mut fy = 0.0;

                for (other, q) in positions[..n].iter().enumerate(){
                    if other == node {
                        continue;
                    }
                    let dx = p.x - q.x;
                    let dy = p.y - q.y;
                    let mut dist = dx.hypot(dy);
                    if dist == 0.0 {
                        dist = FORCE_MIN_DISTANCE;
                    }
                    let force = self.repulsion / (dist * dist);
                    fx += dx / dist * force;
                    fy += dy / dist * force;
                }

                for &neighbor in graph.neighbors(node){
                    let Some(q) = positions[..n].get(neighbor) else {
                        continue;
                    };
                    fx += (q.x - p.x) * self.attraction;
                    fy += (q.y - p.y) * self.attraction;
                }

                positions[node] = Position::new(
                    p.x + fx * self.step_size,
                    p.y + fy * self.step_size
                );
            }
        }
    }
}
