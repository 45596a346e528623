mod file_store;
mod memory_store;
mod models;
mod patch;
mod trait_def;
mod validation;

pub use file_store::FileFunkoStore;
pub use memory_store::MemoryFunkoStore;
pub use models::{Funko, FunkoGenre, FunkoType};
pub use patch::{merge, FunkoPatch};
pub use trait_def::FunkoStore;
pub use validation::{validate_user, ValidationError, MAX_USER_LEN};
