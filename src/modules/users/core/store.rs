// The store port describes what the routes need from user storage, without
// implementing it.
//
// Responsibilities
// - Append a record, return the full sequence, look a record up by id.
// - Preserve insertion order; a lookup returns the first match.
//
// Boundaries
// - No concrete storage here. Adapters implement this trait in the adapters
//   layer. None of the operations has a failure condition, so none returns a
//   Result: a miss is `None`, not an error.

use crate::modules::users::core::model::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserStore {
    async fn create(&self, user: User) -> User;
    async fn find_all(&self) -> Vec<User>;
    async fn find_one(&self, id: &str) -> Option<User>;
}
