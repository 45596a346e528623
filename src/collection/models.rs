//! Catalog item models stored in a user's collection.
//!
//! Field names and enum values follow the wire format shared with clients,
//! so the same types are used both on disk and on the socket.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Enumerations
// =============================================================================

/// Product line of a Funko.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum FunkoType {
    #[serde(rename = "Pop!", alias = "Pop")]
    Pop,
    #[serde(rename = "Pop! Rides", alias = "PopRides")]
    PopRides,
    #[serde(rename = "Vynil Soda", alias = "VynilSoda")]
    VynilSoda,
    #[serde(rename = "Vynil Gold", alias = "VynilGold")]
    VynilGold,
}

impl FunkoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunkoType::Pop => "Pop!",
            FunkoType::PopRides => "Pop! Rides",
            FunkoType::VynilSoda => "Vynil Soda",
            FunkoType::VynilGold => "Vynil Gold",
        }
    }
}

impl fmt::Display for FunkoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Genre the Funko belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum FunkoGenre {
    #[serde(rename = "Animación", alias = "Animation")]
    Animation,
    #[serde(rename = "Películas y TV", alias = "MoviesTV")]
    MoviesTv,
    #[serde(rename = "Videojuegos", alias = "VideoGames")]
    VideoGames,
    #[serde(rename = "Deportes", alias = "Sports")]
    Sports,
    #[serde(rename = "Música", alias = "Music")]
    Music,
    #[serde(rename = "Anime")]
    Anime,
}

impl FunkoGenre {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunkoGenre::Animation => "Animación",
            FunkoGenre::MoviesTv => "Películas y TV",
            FunkoGenre::VideoGames => "Videojuegos",
            FunkoGenre::Sports => "Deportes",
            FunkoGenre::Music => "Música",
            FunkoGenre::Anime => "Anime",
        }
    }
}

impl fmt::Display for FunkoGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record
// =============================================================================

/// A single item of a user's collection.
///
/// The `id` is unique within one user's collection and never changes once the
/// record has been created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Funko {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub funko_type: FunkoType,
    pub genre: FunkoGenre,
    pub franchise: String,
    /// Number of the item within its franchise.
    pub number: u32,
    pub exclusive: bool,
    pub special_features: String,
    pub market_value: f64,
}
