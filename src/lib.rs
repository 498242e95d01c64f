// Public API exports
pub mod domain;
pub mod shared;

// UI components, layouts and the single page
pub mod app;
