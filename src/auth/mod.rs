//! Authentication: argon2 password hashing, JWT issuing/verification,
//! the bearer-token middleware and the login/profile endpoints.

pub mod handlers;
pub mod middleware;
pub mod service;

pub use middleware::AuthUser;
pub use service::{AuthService, Claims};
