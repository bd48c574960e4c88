use {
    serde::{Serialize, Deserialize},
};

/// Disease state of one agent.
///
/// Transitions only go `Susceptible -> Infected -> {Immune | LongCondition}`,
/// both resolved states are absorbing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy, Default)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState{
    #[default]
    Susceptible,
    Infected,
    Immune,
    LongCondition,
}

impl InfectionState{
    pub fn sus_check(&self) -> bool{
        matches!(self,InfectionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self,InfectionState::Infected)
    }
    pub fn imm_check(&self) -> bool{
        matches!(self,InfectionState::Immune)
    }
    pub fn long_check(&self) -> bool{
        matches!(self,InfectionState::LongCondition)
    }

    /// Immune or long condition, nothing happens to the node anymore
    pub fn is_resolved(&self) -> bool
    {
        matches!(self, Self::Immune | Self::LongCondition)
    }

    pub fn is_or_was_infected(&self) -> bool
    {
        !self.sus_check()
    }

    pub fn name(&self) -> &'static str
    {
        match self{
            Self::Susceptible => "susceptible",
            Self::Infected => "infected",
            Self::Immune => "immune",
            Self::LongCondition => "longcondition",
        }
    }
}

/// Number of agents per state at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts{
    pub susceptible: u32,
    pub infected: u32,
    pub immune: u32,
    pub long_condition: u32,
}

impl StatusCounts{
    pub fn from_states<'a, I>(states: I) -> Self
    where I: IntoIterator<Item = &'a InfectionState>
    {
        let mut counts = Self::default();
        for state in states{
            counts.add(*state);
        }
        counts
    }

    #[inline]
    pub fn add(&mut self, state: InfectionState)
    {
        match state{
            InfectionState::Susceptible => self.susceptible += 1,
            InfectionState::Infected => self.infected += 1,
            InfectionState::Immune => self.immune += 1,
            InfectionState::LongCondition => self.long_condition += 1,
        }
    }

    pub fn total(&self) -> u32
    {
        self.susceptible + self.infected + self.immune + self.long_condition
    }

    pub fn ever_infected(&self) -> u32
    {
        self.infected + self.immune + self.long_condition
    }

    pub fn resolved(&self) -> u32
    {
        self.immune + self.long_condition
    }

    /// fraction of the population that is currently infected, 0 for an empty network
    pub fn infected_fraction(&self) -> f64
    {
        match self.total(){
            0 => 0.0,
            t => self.infected as f64 / t as f64
        }
    }
}
