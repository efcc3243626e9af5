/// Middleware modules
pub mod cors;
pub mod logging;

pub use cors::{contact_cors, method_gate};
pub use logging::logging_middleware;
