/// API endpoint modules
pub mod check;
pub mod contact;
pub mod ping;
