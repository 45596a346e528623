use super::envelope::{CommandKind, RequestEnvelope};
use super::error::RequestError;
use crate::collection::{validate_user, Funko, FunkoPatch};

/// A request whose preconditions have been checked.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add { user: String, funko: Funko },
    Update { user: String, id: u32, patch: FunkoPatch },
    Remove { user: String, id: u32 },
    Read { user: String, id: u32 },
    List { user: String },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add { .. } => CommandKind::Add,
            Command::Update { .. } => CommandKind::Update,
            Command::Remove { .. } => CommandKind::Remove,
            Command::Read { .. } => CommandKind::Read,
            Command::List { .. } => CommandKind::List,
        }
    }

    pub fn user(&self) -> &str {
        match self {
            Command::Add { user, .. }
            | Command::Update { user, .. }
            | Command::Remove { user, .. }
            | Command::Read { user, .. }
            | Command::List { user } => user,
        }
    }
}

impl TryFrom<RequestEnvelope> for Command {
    type Error = RequestError;

    fn try_from(request: RequestEnvelope) -> Result<Self, Self::Error> {
        let RequestEnvelope {
            kind,
            user,
            id,
            funko,
        } = request;

        let command = match kind {
            CommandKind::Add => {
                let payload = funko.ok_or(RequestError::MissingFunko(kind))?;
                let funko = payload.into_full().ok_or(RequestError::IncompleteFunko)?;
                Command::Add { user, funko }
            }
            CommandKind::Update => match (id, funko) {
                (Some(id), Some(payload)) => Command::Update {
                    user,
                    id,
                    patch: payload.into_patch(),
                },
                _ => return Err(RequestError::MissingUpdateData),
            },
            CommandKind::Remove => Command::Remove {
                user,
                id: id.ok_or(RequestError::MissingId(kind))?,
            },
            CommandKind::Read => Command::Read {
                user,
                id: id.ok_or(RequestError::MissingId(kind))?,
            },
            CommandKind::List => Command::List { user },
        };

        validate_user(command.user())?;
        Ok(command)
    }
}
