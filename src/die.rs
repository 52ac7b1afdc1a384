use std::str::FromStr;

use crate::error::DiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieType {
    /// Every die in selector order. The first one is the default selection.
    pub const ALL: [DieType; 6] = [
        DieType::D4,
        DieType::D6,
        DieType::D8,
        DieType::D10,
        DieType::D12,
        DieType::D20,
    ];

    /// Upper bound of the draw range.
    pub fn faces(self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
        }
    }

    /// Number of vertices of the polygon drawn for this die.
    /// Purely cosmetic, it has nothing to do with the face count.
    pub fn display_sides(self) -> u32 {
        match self {
            DieType::D4 => 3,
            DieType::D6 | DieType::D8 => 4,
            DieType::D10 | DieType::D12 => 10,
            DieType::D20 => 6,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DieType::D4 => "d4",
            DieType::D6 => "d6",
            DieType::D8 => "d8",
            DieType::D10 => "d10",
            DieType::D12 => "d12",
            DieType::D20 => "d20",
        }
    }
}

impl Default for DieType {
    fn default() -> Self {
        DieType::ALL[0]
    }
}

impl FromStr for DieType {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::die_type(s)
    }
}

impl std::fmt::Display for DieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::DieType;

    #[test]
    fn test_faces_match_code_suffix() {
        for die in DieType::ALL {
            let suffix: u32 = die.code()[1..].parse().unwrap();
            assert_eq!(die.faces(), suffix, "{die:?}");
        }
    }

    #[test]
    fn test_display_sides_table() {
        use DieType::*;

        let expected = [(D4, 3), (D6, 4), (D8, 4), (D10, 10), (D12, 10), (D20, 6)];
        for (die, sides) in expected {
            assert_eq!(die.display_sides(), sides, "{die:?}");
        }
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(DieType::default(), DieType::D4);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for die in DieType::ALL {
            assert_eq!(die.to_string().parse::<DieType>().unwrap(), die);
        }
    }
}
