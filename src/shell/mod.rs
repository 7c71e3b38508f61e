// Composition root for the users service.
//
// Responsibilities:
// - Instantiate the in-memory store.
// - Wire the store into the HTTP router via AppState.
// - Apply the tower-http layers, bind, and serve.

pub mod http;
pub mod state;
