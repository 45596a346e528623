use crate::collection::{merge, Funko, FunkoPatch, FunkoStore};
use crate::protocol::{decode_request, Command, CommandKind, ResponseEnvelope};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Turns one complete request payload into exactly one response.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn FunkoStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn FunkoStore>) -> Self {
        Dispatcher { store }
    }

    pub fn dispatch(&self, payload: &[u8]) -> ResponseEnvelope {
        let request = match decode_request(payload) {
            Ok(request) => request,
            Err(err) => {
                warn!("Could not decode request ({}): {}", err.code(), err);
                // Nothing meaningful to echo back.
                return ResponseEnvelope::failure(CommandKind::Add, err.to_string());
            }
        };

        let kind = request.kind;
        match Command::try_from(request) {
            Ok(command) => self.execute(command),
            Err(err) => {
                warn!("Rejected {} request ({}): {}", kind, err.code(), err);
                ResponseEnvelope::failure(kind, err.to_string())
            }
        }
    }

    pub fn execute(&self, command: Command) -> ResponseEnvelope {
        info!("Processing command: {} for user {}", command.kind(), command.user());
        match command {
            Command::Add { user, funko } => self.add(&user, funko),
            Command::Update { user, id, patch } => self.update(&user, id, &patch),
            Command::Remove { user, id } => self.remove(&user, id),
            Command::Read { user, id } => self.read(&user, id),
            Command::List { user } => self.list(&user),
        }
    }

    fn add(&self, user: &str, funko: Funko) -> ResponseEnvelope {
        let kind = CommandKind::Add;
        match self.store.create(user, &funko) {
            Ok(true) => ResponseEnvelope::success(
                kind,
                format!("Funko with ID {} added to {} collection.", funko.id, user),
            ),
            Ok(false) => ResponseEnvelope::failure(
                kind,
                format!(
                    "Error: Funko with ID {} already exists for {}.",
                    funko.id, user
                ),
            ),
            Err(err) => {
                error!("Failed to add Funko {} for {}: {:#}", funko.id, user, err);
                ResponseEnvelope::failure(
                    kind,
                    format!("Error: Could not add Funko with ID {} for {}.", funko.id, user),
                )
            }
        }
    }

    fn update(&self, user: &str, id: u32, patch: &FunkoPatch) -> ResponseEnvelope {
        let kind = CommandKind::Update;
        let not_found = || {
            ResponseEnvelope::failure(
                kind,
                format!(
                    "Error: Funko with ID {} not found for user {}. Cannot update.",
                    id, user
                ),
            )
        };
        let write_failed = || {
            ResponseEnvelope::failure(
                kind,
                format!("Error: Could not update Funko with ID {} for {}.", id, user),
            )
        };

        let existing = match self.store.read(user, id) {
            Ok(Some(existing)) => existing,
            Ok(None) => return not_found(),
            Err(err) => {
                error!("Failed to read Funko {} of {} for update: {:#}", id, user, err);
                return write_failed();
            }
        };

        let updated = merge(&existing, patch, id);
        match self.store.update(user, &updated) {
            Ok(true) => ResponseEnvelope::success(
                kind,
                format!("Funko with ID {} updated for {}.", id, user),
            ),
            // Removed by another connection between the read and the write.
            Ok(false) => not_found(),
            Err(err) => {
                error!("Failed to update Funko {} for {}: {:#}", id, user, err);
                write_failed()
            }
        }
    }

    fn remove(&self, user: &str, id: u32) -> ResponseEnvelope {
        let kind = CommandKind::Remove;
        match self.store.delete(user, id) {
            Ok(true) => ResponseEnvelope::success(
                kind,
                format!("Funko with ID {} removed from {} collection.", id, user),
            ),
            Ok(false) => ResponseEnvelope::failure(
                kind,
                format!("Error: Funko with ID {} not found for {}.", id, user),
            ),
            Err(err) => {
                error!("Failed to remove Funko {} for {}: {:#}", id, user, err);
                ResponseEnvelope::failure(
                    kind,
                    format!("Error: Could not remove Funko with ID {} for {}.", id, user),
                )
            }
        }
    }

    fn read(&self, user: &str, id: u32) -> ResponseEnvelope {
        let kind = CommandKind::Read;
        match self.store.read(user, id) {
            Ok(Some(funko)) => {
                ResponseEnvelope::success(kind, format!("Funko with ID {} found.", id))
                    .with_funkos(vec![funko])
            }
            Ok(None) => ResponseEnvelope::failure(
                kind,
                format!("Error: Funko with ID {} not found for {}.", id, user),
            )
            .with_funkos(Vec::new()),
            Err(err) => {
                error!("Failed to read Funko {} for {}: {:#}", id, user, err);
                ResponseEnvelope::failure(
                    kind,
                    format!("Error: Could not read Funko with ID {} for {}.", id, user),
                )
                .with_funkos(Vec::new())
            }
        }
    }

    fn list(&self, user: &str) -> ResponseEnvelope {
        let kind = CommandKind::List;
        match self.store.list(user) {
            Ok(funkos) => {
                let message = if funkos.is_empty() {
                    format!("No Funkos found for {}.", user)
                } else {
                    format!("{} Funkos listed for {}.", funkos.len(), user)
                };
                ResponseEnvelope::success(kind, message).with_funkos(funkos)
            }
            Err(err) => {
                error!("Failed to list Funkos for {}: {:#}", user, err);
                ResponseEnvelope::failure(
                    kind,
                    format!("Error: Could not list Funkos for {}.", user),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{FunkoGenre, FunkoType, MemoryFunkoStore};
    use crate::protocol::{encode_request, RequestEnvelope};
    use anyhow::{anyhow, Result};
    use serde_json::json;

    fn make_funko(id: u32, name: &str, market_value: f64) -> Funko {
        Funko {
            id,
            name: name.to_string(),
            description: "Test item".to_string(),
            funko_type: FunkoType::Pop,
            genre: FunkoGenre::Animation,
            franchise: "Looney Tunes".to_string(),
            number: 4,
            exclusive: false,
            special_features: "None".to_string(),
            market_value,
        }
    }

    fn make_dispatcher() -> (Arc<MemoryFunkoStore>, Dispatcher) {
        let store = Arc::new(MemoryFunkoStore::new());
        (store.clone(), Dispatcher::new(store))
    }

    fn send(dispatcher: &Dispatcher, request: RequestEnvelope) -> ResponseEnvelope {
        dispatcher.dispatch(&encode_request(&request).unwrap())
    }

    /// Serves reads from an inner store and fails every write.
    struct ReadOnlyStore {
        inner: MemoryFunkoStore,
    }

    impl FunkoStore for ReadOnlyStore {
        fn create(&self, _user: &str, _funko: &Funko) -> Result<bool> {
            Err(anyhow!("disk full"))
        }
        fn read(&self, user: &str, id: u32) -> Result<Option<Funko>> {
            self.inner.read(user, id)
        }
        fn update(&self, _user: &str, _funko: &Funko) -> Result<bool> {
            Err(anyhow!("disk full"))
        }
        fn delete(&self, _user: &str, _id: u32) -> Result<bool> {
            Err(anyhow!("disk full"))
        }
        fn list(&self, user: &str) -> Result<Vec<Funko>> {
            self.inner.list(user)
        }
    }

    /// Panics on any access.
    struct UnreachableStore;

    impl FunkoStore for UnreachableStore {
        fn create(&self, _user: &str, _funko: &Funko) -> Result<bool> {
            panic!("store must not be touched")
        }
        fn read(&self, _user: &str, _id: u32) -> Result<Option<Funko>> {
            panic!("store must not be touched")
        }
        fn update(&self, _user: &str, _funko: &Funko) -> Result<bool> {
            panic!("store must not be touched")
        }
        fn delete(&self, _user: &str, _id: u32) -> Result<bool> {
            panic!("store must not be touched")
        }
        fn list(&self, _user: &str) -> Result<Vec<Funko>> {
            panic!("store must not be touched")
        }
    }

    #[test]
    fn test_duplicate_add_fails_and_keeps_state() {
        let (store, dispatcher) = make_dispatcher();

        let first = send(&dispatcher, RequestEnvelope::add("alice", make_funko(1, "Bugs", 10.0)));
        let second = send(&dispatcher, RequestEnvelope::add("alice", make_funko(1, "Daffy", 99.0)));

        assert!(first.success);
        assert_eq!(first.kind, CommandKind::Add);
        assert!(!second.success);
        assert!(second.message.unwrap().contains("already exists"));
        assert_eq!(store.read("alice", 1).unwrap().unwrap().name, "Bugs");
    }

    #[test]
    fn test_update_merges_partial_payload() {
        let (store, dispatcher) = make_dispatcher();
        store.create("alice", &make_funko(1, "A", 10.0)).unwrap();

        let patch = FunkoPatch {
            name: Some("B".to_string()),
            ..Default::default()
        };
        let response = send(&dispatcher, RequestEnvelope::update("alice", 1, patch));

        assert!(response.success);
        assert_eq!(response.kind, CommandKind::Update);
        let stored = store.read("alice", 1).unwrap().unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.name, "B");
        assert_eq!(stored.market_value, 10.0);
    }

    #[test]
    fn test_update_cannot_move_record_to_another_id() {
        let (store, dispatcher) = make_dispatcher();
        store.create("alice", &make_funko(1, "A", 10.0)).unwrap();

        let body = json!({
            "type": "update",
            "user": "alice",
            "id": 1,
            "funko": {"id": 2, "name": "B"},
        });
        let response = dispatcher.dispatch(body.to_string().as_bytes());

        assert!(response.success);
        assert_eq!(store.read("alice", 1).unwrap().unwrap().name, "B");
        assert_eq!(store.read("alice", 2).unwrap(), None);
        assert_eq!(store.list("alice").unwrap().len(), 1);
    }

    #[test]
    fn test_update_missing_record() {
        let (store, dispatcher) = make_dispatcher();

        let response = send(
            &dispatcher,
            RequestEnvelope::update("alice", 7, FunkoPatch::default()),
        );

        assert!(!response.success);
        assert!(response.message.unwrap().contains("not found"));
        assert!(store.list("alice").unwrap().is_empty());
    }

    #[test]
    fn test_failed_update_write_keeps_original() {
        let inner = MemoryFunkoStore::new();
        inner.create("alice", &make_funko(1, "A", 10.0)).unwrap();
        let store = Arc::new(ReadOnlyStore { inner });
        let dispatcher = Dispatcher::new(store.clone());

        let patch = FunkoPatch {
            name: Some("B".to_string()),
            ..Default::default()
        };
        let response = send(&dispatcher, RequestEnvelope::update("alice", 1, patch));

        assert!(!response.success);
        let message = response.message.unwrap();
        assert!(message.contains("Could not update"));
        assert!(!message.contains("not found"));
        assert_eq!(store.read("alice", 1).unwrap().unwrap().name, "A");
    }

    #[test]
    fn test_store_failure_on_add_is_reported() {
        let store = Arc::new(ReadOnlyStore {
            inner: MemoryFunkoStore::new(),
        });
        let dispatcher = Dispatcher::new(store);

        let response = send(&dispatcher, RequestEnvelope::add("alice", make_funko(1, "A", 1.0)));

        assert!(!response.success);
        assert!(response.message.unwrap().contains("Could not add"));
    }

    #[test]
    fn test_remove() {
        let (store, dispatcher) = make_dispatcher();
        store.create("alice", &make_funko(1, "A", 10.0)).unwrap();

        let removed = send(&dispatcher, RequestEnvelope::remove("alice", 1));
        let again = send(&dispatcher, RequestEnvelope::remove("alice", 1));

        assert!(removed.success);
        assert!(!again.success);
        assert!(again.message.unwrap().contains("not found"));
    }

    #[test]
    fn test_read_existing_returns_single_record() {
        let (store, dispatcher) = make_dispatcher();
        let funko = make_funko(1, "A", 10.0);
        store.create("alice", &funko).unwrap();

        let response = send(&dispatcher, RequestEnvelope::read("alice", 1));

        assert!(response.success);
        assert_eq!(response.funkos, Some(vec![funko]));
    }

    #[test]
    fn test_read_missing_returns_empty_sequence() {
        let (_store, dispatcher) = make_dispatcher();

        let response = send(&dispatcher, RequestEnvelope::read("alice", 999));

        assert!(!response.success);
        assert_eq!(response.funkos, Some(Vec::new()));
        assert!(response.message.unwrap().contains("not found"));
    }

    #[test]
    fn test_list_is_ordered_and_never_fails_when_empty() {
        let (store, dispatcher) = make_dispatcher();

        let empty = send(&dispatcher, RequestEnvelope::list("alice"));
        assert!(empty.success);
        assert_eq!(empty.funkos, Some(Vec::new()));

        for id in [5, 1, 3] {
            store.create("alice", &make_funko(id, "X", 1.0)).unwrap();
        }
        let listed = send(&dispatcher, RequestEnvelope::list("alice"));
        let ids: Vec<u32> = listed.funkos.unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(listed.message.as_deref(), Some("3 Funkos listed for alice."));
    }

    #[test]
    fn test_malformed_payload_yields_parse_error() {
        let (_store, dispatcher) = make_dispatcher();

        let response = dispatcher.dispatch(b"{ this is not json");

        assert!(!response.success);
        assert_eq!(response.kind, CommandKind::Add);
        assert!(response
            .message
            .unwrap()
            .starts_with("Server error processing request"));
    }

    #[test]
    fn test_missing_fields_never_touch_store() {
        let dispatcher = Dispatcher::new(Arc::new(UnreachableStore));

        let cases = [
            (r#"{"type": "add", "user": "alice"}"#, CommandKind::Add, "Funko data missing"),
            (r#"{"type": "update", "user": "alice", "id": 1}"#, CommandKind::Update, "update data missing"),
            (r#"{"type": "remove", "user": "alice"}"#, CommandKind::Remove, "Funko ID missing"),
            (r#"{"type": "read", "user": "alice"}"#, CommandKind::Read, "Funko ID missing"),
            (r#"{"type": "list", "user": ".."}"#, CommandKind::List, "invalid user"),
        ];

        for (body, kind, expected) in cases {
            let response = dispatcher.dispatch(body.as_bytes());
            assert!(!response.success, "{}", body);
            assert_eq!(response.kind, kind);
            assert!(response.message.unwrap().contains(expected), "{}", body);
        }
    }
}
