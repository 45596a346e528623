//! Records and user names shared by the end-to-end tests.

use funko_collection_server::collection::{Funko, FunkoGenre, FunkoType};

/// Regular test user
pub const TEST_USER: &str = "testuser";

/// A second user whose collection must stay independent
pub const OTHER_USER: &str = "otheruser";

/// A complete record with the given id.
pub fn funko(id: u32) -> Funko {
    Funko {
        id,
        name: format!("Funko {}", id),
        description: "Test figure".to_string(),
        funko_type: FunkoType::Pop,
        genre: FunkoGenre::Anime,
        franchise: "Dragon Ball".to_string(),
        number: 100 + id,
        exclusive: false,
        special_features: "None".to_string(),
        market_value: 25.0,
    }
}

/// The record used by the partial update tests.
pub fn goku() -> Funko {
    Funko {
        id: 1,
        name: "Goku".to_string(),
        description: "Saiyan".to_string(),
        funko_type: FunkoType::Pop,
        genre: FunkoGenre::Anime,
        franchise: "Dragon Ball".to_string(),
        number: 121,
        exclusive: false,
        special_features: "None".to_string(),
        market_value: 15.0,
    }
}
