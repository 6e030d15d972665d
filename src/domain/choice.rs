use crate::domain::version::VersionBump;
use crate::error::{ReleaseError, Result};

/// Selection made in the version bump menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpChoice {
    Bump(VersionBump),
    Skip,
}

impl BumpChoice {
    /// Menu entries in display order, paired with their key.
    pub const MENU: [(char, BumpChoice); 4] = [
        ('1', BumpChoice::Bump(VersionBump::Patch)),
        ('2', BumpChoice::Bump(VersionBump::Minor)),
        ('3', BumpChoice::Bump(VersionBump::Major)),
        ('4', BumpChoice::Skip),
    ];

    /// Parse the raw menu answer.
    ///
    /// Only the keys `1` through `4` are accepted. Anything else, including
    /// empty input, is an [`ReleaseError::InvalidChoice`]; there is no
    /// re-prompt.
    pub fn from_input(input: &str) -> Result<Self> {
        let answer = input.trim();
        let mut chars = answer.chars();

        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::MENU
                .iter()
                .find(|(menu_key, _)| *menu_key == key)
                .map(|(_, choice)| *choice)
                .ok_or_else(|| ReleaseError::InvalidChoice(answer.to_string())),
            _ => Err(ReleaseError::InvalidChoice(answer.to_string())),
        }
    }
}
