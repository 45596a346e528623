//! Partial updates of stored records.

use super::models::{Funko, FunkoGenre, FunkoType};
use serde::{Deserialize, Serialize};

/// A partial record: every field is optional and only the fields that are
/// present replace the stored values.
///
/// Has no `id` field: an `id` inside an update payload is dropped on
/// deserialization. The target of an update is the id carried by the request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunkoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub funko_type: Option<FunkoType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<FunkoGenre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub franchise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value: Option<f64>,
}

impl FunkoPatch {
    pub fn is_empty(&self) -> bool {
        *self == FunkoPatch::default()
    }
}

impl From<Funko> for FunkoPatch {
    fn from(funko: Funko) -> Self {
        FunkoPatch {
            name: Some(funko.name),
            description: Some(funko.description),
            funko_type: Some(funko.funko_type),
            genre: Some(funko.genre),
            franchise: Some(funko.franchise),
            number: Some(funko.number),
            exclusive: Some(funko.exclusive),
            special_features: Some(funko.special_features),
            market_value: Some(funko.market_value),
        }
    }
}

/// Builds the record that results from applying `patch` on top of `existing`.
///
/// `existing` is left untouched. The result always carries `id`, whatever id
/// `existing` had.
pub fn merge(existing: &Funko, patch: &FunkoPatch, id: u32) -> Funko {
    let patch = patch.clone();
    Funko {
        id,
        name: patch.name.unwrap_or_else(|| existing.name.clone()),
        description: patch
            .description
            .unwrap_or_else(|| existing.description.clone()),
        funko_type: patch.funko_type.unwrap_or(existing.funko_type),
        genre: patch.genre.unwrap_or(existing.genre),
        franchise: patch.franchise.unwrap_or_else(|| existing.franchise.clone()),
        number: patch.number.unwrap_or(existing.number),
        exclusive: patch.exclusive.unwrap_or(existing.exclusive),
        special_features: patch
            .special_features
            .unwrap_or_else(|| existing.special_features.clone()),
        market_value: patch.market_value.unwrap_or(existing.market_value),
    }
}
