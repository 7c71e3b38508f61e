// In memory implementation of the user store port.
//
// Purpose
// - Hold the user records for the lifetime of the process. There is no other
//   backend; records are never persisted, mutated, or deleted.
//
// Responsibilities
// - Append records in arrival order, hand out the full sequence, and resolve
//   an id to the first record that carries it.

use crate::modules::users::core::model::User;
use crate::modules::users::core::store::UserStore;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUsers {
    rows: RwLock<Vec<User>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUsers {
    async fn create(&self, user: User) -> User {
        self.rows.write().await.push(user.clone());
        user
    }

    async fn find_all(&self) -> Vec<User> {
        self.rows.read().await.clone()
    }

    async fn find_one(&self, id: &str) -> Option<User> {
        self.rows.read().await.iter().find(|u| u.id == id).cloned()
    }
}
