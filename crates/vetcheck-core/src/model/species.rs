use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::VetError;

/// Species offered by the console's check-in menu
///
/// Only the console restricts input to this set; the store takes any
/// non-empty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cat,
    Dog,
    Parrot,
}

impl Species {
    /// Menu order
    pub const ALL: [Species; 3] = [Species::Cat, Species::Dog, Species::Parrot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
            Species::Parrot => "Parrot",
        }
    }

    /// Look up a species by its 1-based menu position
    pub fn from_menu_index(index: usize) -> Option<Species> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = VetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VetError::UnknownSpecies {
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_index_is_one_based() {
        assert_eq!(Species::from_menu_index(1), Some(Species::Cat));
        assert_eq!(Species::from_menu_index(3), Some(Species::Parrot));
        assert_eq!(Species::from_menu_index(0), None);
        assert_eq!(Species::from_menu_index(4), None);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("dog".parse::<Species>(), Ok(Species::Dog));
        assert_eq!(" PARROT ".parse::<Species>(), Ok(Species::Parrot));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Ferret".parse::<Species>(),
            Err(VetError::UnknownSpecies {
                label: "Ferret".to_string()
            })
        );
    }
}
