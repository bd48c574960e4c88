pub mod sir_states;
pub use sir_states::*;

pub mod duration;
pub use duration::*;

pub mod small_world_options;
pub use small_world_options::*;

pub mod small_world;
pub use small_world::*;

pub mod simple_prop;
pub use simple_prop::*;

pub mod clusters;
pub use clusters::*;

pub mod controller;
pub use controller::*;

pub mod sir_writer;
pub use sir_writer::*;
