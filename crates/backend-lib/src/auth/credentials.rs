// ============================
// crates/backend-lib/src/auth/credentials.rs
// ============================
//! Username/password lookup for login.
use std::{collections::HashMap, sync::Arc};

/// In-memory credential table, fixed at startup from configuration.
#[derive(Clone)]
pub struct CredentialTable {
    users: Arc<HashMap<String, String>>,
}

impl CredentialTable {
    /// Build a table holding exactly one user.
    pub fn single(username: String, password: String) -> Self {
        let mut users = HashMap::new();
        users.insert(username, password);
        Self {
            users: Arc::new(users),
        }
    }

    /// Check a username/password pair. Both must match exactly; the caller
    /// never learns which half was wrong.
    pub fn check(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|stored| stored == password)
    }
}
