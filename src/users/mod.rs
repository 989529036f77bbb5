//! User management: admin CRUD over accounts plus the profile DTO shared
//! with the auth endpoints.

pub mod handlers;
pub mod models;
pub mod store;

pub use models::UserProfile;
pub use store::UserStore;
