//! Request and response documents exchanged over one connection.

use super::error::RequestError;
use crate::collection::{Funko, FunkoPatch};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Add,
    Update,
    Remove,
    Read,
    List,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::Update => "update",
            CommandKind::Remove => "remove",
            CommandKind::Read => "read",
            CommandKind::List => "list",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `funko` member of a request.
///
/// A document carrying every record field decodes as `Full`, anything else
/// that is still record-shaped decodes as `Partial`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunkoPayload {
    Full(Funko),
    Partial(FunkoPatch),
}

impl FunkoPayload {
    pub fn into_full(self) -> Option<Funko> {
        match self {
            FunkoPayload::Full(funko) => Some(funko),
            FunkoPayload::Partial(_) => None,
        }
    }

    pub fn into_patch(self) -> FunkoPatch {
        match self {
            FunkoPayload::Full(funko) => funko.into(),
            FunkoPayload::Partial(patch) => patch,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funko: Option<FunkoPayload>,
}

impl RequestEnvelope {
    pub fn add(user: impl Into<String>, funko: Funko) -> Self {
        RequestEnvelope {
            kind: CommandKind::Add,
            user: user.into(),
            id: None,
            funko: Some(FunkoPayload::Full(funko)),
        }
    }

    pub fn update(user: impl Into<String>, id: u32, patch: FunkoPatch) -> Self {
        RequestEnvelope {
            kind: CommandKind::Update,
            user: user.into(),
            id: Some(id),
            funko: Some(FunkoPayload::Partial(patch)),
        }
    }

    pub fn remove(user: impl Into<String>, id: u32) -> Self {
        Self::with_id(CommandKind::Remove, user, id)
    }

    pub fn read(user: impl Into<String>, id: u32) -> Self {
        Self::with_id(CommandKind::Read, user, id)
    }

    pub fn list(user: impl Into<String>) -> Self {
        RequestEnvelope {
            kind: CommandKind::List,
            user: user.into(),
            id: None,
            funko: None,
        }
    }

    fn with_id(kind: CommandKind, user: impl Into<String>, id: u32) -> Self {
        RequestEnvelope {
            kind,
            user: user.into(),
            id: Some(id),
            funko: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funkos: Option<Vec<Funko>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(kind: CommandKind, message: impl Into<String>) -> Self {
        ResponseEnvelope {
            kind,
            success: true,
            funkos: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(kind: CommandKind, message: impl Into<String>) -> Self {
        ResponseEnvelope {
            kind,
            success: false,
            funkos: None,
            message: Some(message.into()),
        }
    }

    pub fn with_funkos(mut self, funkos: Vec<Funko>) -> Self {
        self.funkos = Some(funkos);
        self
    }
}

// =============================================================================
// Codec
// =============================================================================

pub fn decode_request(bytes: &[u8]) -> Result<RequestEnvelope, RequestError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_request(request: &RequestEnvelope) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(request)
}

pub fn decode_response(bytes: &[u8]) -> Result<ResponseEnvelope, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn encode_response(response: &ResponseEnvelope) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(response)
}
