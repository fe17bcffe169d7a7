pub mod error;
pub mod identity;
pub mod response;
pub mod user;
