//! Cable format classes.
//!
//! A Camera Link cable carries a fixed number of data ports depending on its
//! electrical format. The four classes and their capacities:
//!
//! | Class | Ports |
//! |-------|-------|
//! | Base | 3 |
//! | Medium | 6 |
//! | Full | 8 |
//! | Deca | 10 |

/// Hard upper bound on ports per physical cable (Deca capacity).
pub const MAX_PORTS_PER_CABLE: u32 = 10;

/// Electrical format class of a single cable.
///
/// Ordered by capacity, so `Base < Medium < Full < Deca`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormatClass {
    /// Up to 3 ports.
    Base,
    /// Up to 6 ports.
    Medium,
    /// Up to 8 ports.
    Full,
    /// Up to 10 ports.
    Deca,
}

impl FormatClass {
    /// All classes, smallest capacity first.
    pub const ALL: [Self; 4] = [Self::Base, Self::Medium, Self::Full, Self::Deca];

    /// Maximum number of data ports this format carries.
    #[must_use]
    pub const fn port_capacity(self) -> u32 {
        match self {
            Self::Base => 3,
            Self::Medium => 6,
            Self::Full => 8,
            Self::Deca => 10,
        }
    }

    /// Smallest class that fits `ports`, or `None` beyond Deca capacity.
    #[must_use]
    pub const fn smallest_for(ports: u32) -> Option<Self> {
        match ports {
            0..=3 => Some(Self::Base),
            4..=6 => Some(Self::Medium),
            7..=8 => Some(Self::Full),
            9..=10 => Some(Self::Deca),
            _ => None,
        }
    }

    /// Format name as printed on configuration sheets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Medium => "Medium",
            Self::Full => "Full",
            Self::Deca => "Deca",
        }
    }
}

impl std::fmt::Display for FormatClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
