use service::file::user_store::UserStore;

/// Shared handler state. The store is internally reference-counted, so
/// cloning this per request is cheap.
#[derive(Clone)]
pub struct ServerState {
    pub users: UserStore,
}
