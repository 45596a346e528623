use super::envelope::CommandKind;
use crate::collection::ValidationError;
use thiserror::Error;

/// Reasons a request is answered with a failure before reaching the store.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Server error processing request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Error: Funko ID missing in {0} request.")]
    MissingId(CommandKind),

    #[error("Error: Funko data missing in {0} request.")]
    MissingFunko(CommandKind),

    #[error("Error: Funko ID and/or update data missing in update request.")]
    MissingUpdateData,

    #[error("Error: Funko data incomplete in add request, every field is required.")]
    IncompleteFunko,

    #[error("Error: invalid user: {0}")]
    InvalidUser(#[from] ValidationError),
}

impl RequestError {
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::Parse(_) => "parse_error",
            RequestError::MissingId(_) => "id_missing",
            RequestError::MissingFunko(_) => "funko_missing",
            RequestError::MissingUpdateData => "update_data_missing",
            RequestError::IncompleteFunko => "funko_incomplete",
            RequestError::InvalidUser(_) => "invalid_user",
        }
    }
}
