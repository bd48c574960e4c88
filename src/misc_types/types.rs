use{
    serde::{Serialize, Deserialize},
    std::num::*,
};

// dashboard defaults
pub const DEFAULT_SYSTEM_SIZE: usize = 500;
pub const DEFAULT_AVERAGE_DEGREE: usize = 5;
pub const DEFAULT_INITIAL_INFECTED: usize = 5;
pub const DEFAULT_SPREAD_CHANCE: f64 = 10.0;
pub const DEFAULT_LONG_CONDITION_PROB: f64 = 0.15;

/// shortest infection episode, in days
pub const DEFAULT_MIN_DURATION: u32 = 10;
/// number of distinct durations above the minimum (10..=14 days)
pub const DEFAULT_DURATION_SPREAD: u32 = 5;

pub const DEFAULT_SIR_SEED: u64 = 1489264107025;
pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_MAX_DAYS: usize = 1000;
pub const DEFAULT_SAMPLES: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(1000)};

/// How the 2-D coordinates of the contact network are computed.
/// Purely cosmetic, the epidemic never looks at positions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutType{
    #[default]
    Force,
    Circular,
    Grid,
}

impl LayoutType{
    pub fn name(self) -> &'static str
    {
        match self{
            Self::Force => "force",
            Self::Circular => "circ",
            Self::Grid => "grid",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub enum MeasureType {
    // infected nodes that ended immune
    Immune,
    // infected nodes that ended with a long condition
    LongCondition,
    // ever infected
    C,
    // max infected
    M,
    // day of the maximum
    PeakDay,
    // days until no node is infected anymore
    Duration,
}

impl MeasureType{
    pub const ALL: [MeasureType; 6] = [
        Self::Immune,
        Self::LongCondition,
        Self::C,
        Self::M,
        Self::PeakDay,
        Self::Duration,
    ];

    pub fn name(self) -> &'static str
    {
        match self{
            Self::Immune => "immune",
            Self::LongCondition => "long_condition",
            Self::C => "C",
            Self::M => "M",
            Self::PeakDay => "peak_day",
            Self::Duration => "duration",
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn measure_names_are_unique()
    {
        let mut names: Vec<_> = MeasureType::ALL.iter()
            .map(|m| m.name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MeasureType::ALL.len());
    }

    #[test]
    fn layout_defaults_to_force()
    {
        assert_eq!(LayoutType::default(), LayoutType::Force);
        let json = serde_json::to_string(&LayoutType::Grid).unwrap();
        let back: LayoutType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LayoutType::Grid);
    }
}
