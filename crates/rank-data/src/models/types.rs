//! Strong types for the rank system.
//!
//! These enums pin down the two closed vocabularies of the domain:
//! - [`Platform`] - which network an account lives on
//! - [`Playlist`] - which competitive mode a rank belongs to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Platform
// =============================================================================

/// Gaming platform an account is registered on.
///
/// The storage form (`as_str`) is stable and lowercase. Provider-specific
/// path codes (e.g. `xbl`, `psn` on the tracker) live with the provider
/// that needs them, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Steam,
    Xbox,
    Playstation,
    Epic,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Steam,
        Platform::Xbox,
        Platform::Playstation,
        Platform::Epic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Steam => "steam",
            Platform::Xbox => "xbox",
            Platform::Playstation => "playstation",
            Platform::Epic => "epic",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steam" => Ok(Platform::Steam),
            "xbox" => Ok(Platform::Xbox),
            "playstation" => Ok(Platform::Playstation),
            "epic" => Ok(Platform::Epic),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

// =============================================================================
// Playlist
// =============================================================================

/// Competitive playlist a player is ranked in.
///
/// Declaration order is significant: it is the fixed priority order used to
/// break ties between otherwise equal ranks (`Duel` wins over `Doubles`,
/// and so on down the list). `Ord` derives from declaration order, so a
/// smaller playlist is a higher-priority one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Playlist {
    Duel,
    Doubles,
    Standard,
    Hoops,
    Rumble,
    Dropshot,
    SnowDay,
    Tournament,
}

impl Playlist {
    pub const ALL: [Playlist; 8] = [
        Playlist::Duel,
        Playlist::Doubles,
        Playlist::Standard,
        Playlist::Hoops,
        Playlist::Rumble,
        Playlist::Dropshot,
        Playlist::SnowDay,
        Playlist::Tournament,
    ];

    /// Stable storage key, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Playlist::Duel => "duel",
            Playlist::Doubles => "doubles",
            Playlist::Standard => "standard",
            Playlist::Hoops => "hoops",
            Playlist::Rumble => "rumble",
            Playlist::Dropshot => "dropshot",
            Playlist::SnowDay => "snow_day",
            Playlist::Tournament => "tournament",
        }
    }

    /// Human-readable label used by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            Playlist::Duel => "Duel",
            Playlist::Doubles => "Doubles",
            Playlist::Standard => "Standard",
            Playlist::Hoops => "Hoops",
            Playlist::Rumble => "Rumble",
            Playlist::Dropshot => "Dropshot",
            Playlist::SnowDay => "Snow Day",
            Playlist::Tournament => "Tournament",
        }
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Playlist {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duel" => Ok(Playlist::Duel),
            "doubles" => Ok(Playlist::Doubles),
            "standard" => Ok(Playlist::Standard),
            "hoops" => Ok(Playlist::Hoops),
            "rumble" => Ok(Playlist::Rumble),
            "dropshot" => Ok(Playlist::Dropshot),
            "snow_day" => Ok(Playlist::SnowDay),
            "tournament" => Ok(Playlist::Tournament),
            other => Err(format!("Unknown playlist: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert!("switch".parse::<Platform>().is_err());
    }

    #[test]
    fn test_playlist_round_trip() {
        for playlist in Playlist::ALL {
            assert_eq!(playlist.as_str().parse::<Playlist>().unwrap(), playlist);
        }
    }

    #[test]
    fn test_playlist_priority_order() {
        // Smaller = higher priority. Duel outranks everything.
        assert!(Playlist::Duel < Playlist::Doubles);
        assert!(Playlist::Doubles < Playlist::Standard);
        assert!(Playlist::SnowDay < Playlist::Tournament);
    }

    #[test]
    fn test_playlist_labels() {
        assert_eq!(Playlist::SnowDay.label(), "Snow Day");
        assert_eq!(Playlist::Duel.label(), "Duel");
    }
}
