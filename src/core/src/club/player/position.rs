use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPosition {
    Setter,
    Hitter,
    Middle,
    Libero,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Setter,
        PlayerPosition::Hitter,
        PlayerPosition::Middle,
        PlayerPosition::Libero,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerPosition::Setter => "setter",
            PlayerPosition::Hitter => "hitter",
            PlayerPosition::Middle => "middle",
            PlayerPosition::Libero => "libero",
        }
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PlayerPosition::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| format!("unknown position: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_str() {
        assert_eq!("middle".parse::<PlayerPosition>(), Ok(PlayerPosition::Middle));
        assert!("goalkeeper".parse::<PlayerPosition>().is_err());
    }

    #[test]
    fn test_position_display_matches_parse() {
        for position in PlayerPosition::ALL {
            assert_eq!(position.to_string().parse::<PlayerPosition>(), Ok(position));
        }
    }
}
