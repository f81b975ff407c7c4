//! Users domain: signup, login, user lookup

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{NewUser, User};
pub use domain::password::{hash_password, verify_password};

// Re-export repository types
pub use repository::{UserRepository, UsersRepositories};

// Re-export API types
pub use api::{protected_routes, public_routes, UsersState};
