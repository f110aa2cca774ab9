//! The closed set of body part kinds and their token forms

use crate::io::configuration::PART_KIND_COUNT;
use crate::io::error::{PartError, PartInput, Result, WithInput, invalid_part_kind};
use std::fmt;
use std::str::FromStr;

/// A single body part kind
///
/// Discriminants follow the canonical declaration order, which is the
/// order leftover parts are grouped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartKind {
    /// Extra hit points, always placed first
    Tough = 0,
    /// Movement
    Move = 1,
    /// Resource capacity
    Carry = 2,
    /// Harvesting and building
    Work = 3,
    /// Controller claiming
    Claim = 4,
    /// Healing
    Heal = 5,
    /// Melee attack
    Attack = 6,
    /// Ranged attack
    RangedAttack = 7,
}

impl PartKind {
    /// Every kind in canonical declaration order
    pub const ALL: [Self; PART_KIND_COUNT] = [
        Self::Tough,
        Self::Move,
        Self::Carry,
        Self::Work,
        Self::Claim,
        Self::Heal,
        Self::Attack,
        Self::RangedAttack,
    ];

    /// Position of this kind in [`PartKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Token form of this kind, as used by the game constants
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tough => "tough",
            Self::Move => "move",
            Self::Carry => "carry",
            Self::Work => "work",
            Self::Claim => "claim",
            Self::Heal => "heal",
            Self::Attack => "attack",
            Self::RangedAttack => "ranged_attack",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartKind {
    type Err = PartError;

    /// Parse a token, ignoring surrounding whitespace and ASCII case
    fn from_str(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| invalid_part_kind(&token))
    }
}

/// Parse every token of one input into part kinds
///
/// # Errors
///
/// Returns `InvalidPartKind` for the first unrecognized token, tagged with
/// its position and `input`. Nothing is returned for the valid prefix.
pub fn parse_part_list<S: AsRef<str>>(tokens: &[S], input: PartInput) -> Result<Vec<PartKind>> {
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            token
                .as_ref()
                .parse::<PartKind>()
                .with_input(input, position)
        })
        .collect()
}
