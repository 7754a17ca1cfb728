//! Core domain for the message board: SQLite persistence plus the service
//! layer that validates and shapes messages for the HTTP surface.

mod error;
mod model;
mod service;
mod store;

#[cfg(test)]
mod tests;

pub use error::ServiceError;
pub use model::Message;
pub use service::MessageService;
pub use store::MessageStore;
