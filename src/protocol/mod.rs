//! Wire protocol: one JSON request per connection, terminated by the peer's
//! half-close, answered by one JSON response and a server-side close.

mod command;
mod envelope;
mod error;

pub use command::Command;
pub use envelope::{
    decode_request, decode_response, encode_request, encode_response, CommandKind, FunkoPayload,
    RequestEnvelope, ResponseEnvelope,
};
pub use error::RequestError;
