pub mod auth;
pub mod book;
pub mod loan;
pub mod user;

pub use auth::*;
pub use book::*;
pub use loan::*;
pub use user::*;
