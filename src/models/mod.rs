pub mod response;
pub mod user;
