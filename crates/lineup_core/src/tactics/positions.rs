//! Optional typed view over the free-form position tag.
//!
//! The board stores positions as plain strings and never rejects a tag. This
//! enum is for callers that want to reason about the common roles; anything
//! unrecognised stays available as `Other`.

use serde::{Deserialize, Serialize};

use crate::pitch::PercentPos;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionTag {
    Goalkeeper,
    CenterBack,
    LeftBack,
    RightBack,
    LeftWingBack,
    RightWingBack,
    CentralMidfielder,
    LeftMidfielder,
    RightMidfielder,
    LeftWinger,
    RightWinger,
    Striker,
    Other(String),
}

/// Board centre, used for tags without an anchor.
pub const CENTER_ANCHOR: PercentPos = (50.0, 50.0);

impl PositionTag {
    pub fn all_known() -> &'static [PositionTag] {
        &[
            PositionTag::Goalkeeper,
            PositionTag::CenterBack,
            PositionTag::LeftBack,
            PositionTag::RightBack,
            PositionTag::LeftWingBack,
            PositionTag::RightWingBack,
            PositionTag::CentralMidfielder,
            PositionTag::LeftMidfielder,
            PositionTag::RightMidfielder,
            PositionTag::LeftWinger,
            PositionTag::RightWinger,
            PositionTag::Striker,
        ]
    }

    /// Parse a tag (case-insensitive). Never fails.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_uppercase().as_str() {
            "GK" => Self::Goalkeeper,
            "CB" => Self::CenterBack,
            "LB" => Self::LeftBack,
            "RB" => Self::RightBack,
            "LWB" => Self::LeftWingBack,
            "RWB" => Self::RightWingBack,
            "CM" => Self::CentralMidfielder,
            "LM" => Self::LeftMidfielder,
            "RM" => Self::RightMidfielder,
            "LW" => Self::LeftWinger,
            "RW" => Self::RightWinger,
            "ST" => Self::Striker,
            _ => Self::Other(tag.to_string()),
        }
    }

    pub fn short_name(&self) -> &str {
        match self {
            Self::Goalkeeper => "GK",
            Self::CenterBack => "CB",
            Self::LeftBack => "LB",
            Self::RightBack => "RB",
            Self::LeftWingBack => "LWB",
            Self::RightWingBack => "RWB",
            Self::CentralMidfielder => "CM",
            Self::LeftMidfielder => "LM",
            Self::RightMidfielder => "RM",
            Self::LeftWinger => "LW",
            Self::RightWinger => "RW",
            Self::Striker => "ST",
            Self::Other(tag) => tag,
        }
    }

    /// Default board spot for a newly added player with this role.
    pub fn anchor(&self) -> Option<PercentPos> {
        match self {
            Self::Goalkeeper => Some((50.0, 90.0)),
            Self::CenterBack => Some((50.0, 75.0)),
            Self::LeftBack => Some((20.0, 75.0)),
            Self::RightBack => Some((80.0, 75.0)),
            Self::LeftWingBack => Some((15.0, 60.0)),
            Self::RightWingBack => Some((85.0, 60.0)),
            Self::CentralMidfielder => Some((50.0, 55.0)),
            Self::LeftMidfielder => Some((20.0, 55.0)),
            Self::RightMidfielder => Some((80.0, 55.0)),
            Self::LeftWinger => Some((20.0, 35.0)),
            Self::RightWinger => Some((80.0, 35.0)),
            Self::Striker => Some((50.0, 25.0)),
            Self::Other(_) => None,
        }
    }

    pub fn anchor_or_center(&self) -> PercentPos {
        self.anchor().unwrap_or(CENTER_ANCHOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_known_tags() {
        for tag in PositionTag::all_known() {
            assert_eq!(&PositionTag::parse(tag.short_name()), tag);
            assert!(tag.anchor().is_some());
        }
    }

    #[test]
    fn test_unknown_tags_are_kept() {
        let tag = PositionTag::parse("ZDM");
        assert_eq!(tag, PositionTag::Other("ZDM".to_string()));
        assert_eq!(tag.short_name(), "ZDM");
        assert_eq!(tag.anchor_or_center(), CENTER_ANCHOR);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PositionTag::parse(" gk "), PositionTag::Goalkeeper);
        assert_eq!(PositionTag::parse("st").anchor(), Some((50.0, 25.0)));
    }
}
