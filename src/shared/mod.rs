pub mod errors;
pub mod hooks;
pub mod logging;
