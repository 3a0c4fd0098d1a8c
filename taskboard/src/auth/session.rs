//! Session key-value storage

use dashmap::DashMap;
use std::fmt::Debug;

/// Key under which the encoded session token is stored
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key under which the signed-in user's profile JSON is stored
pub const USER_KEY: &str = "user";

/// String key-value storage holding the session between calls
pub trait SessionStorage: Debug + Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String);

    fn remove(&self, key: &str);
}

/// Process-local session storage
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: DashMap<String, String>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemorySessionStorage::new();
        assert!(storage.get(USER_KEY).is_none());

        storage.set(USER_KEY, "{}".into());
        assert_eq!(storage.get(USER_KEY).as_deref(), Some("{}"));

        storage.remove(USER_KEY);
        assert!(storage.get(USER_KEY).is_none());
    }
}
