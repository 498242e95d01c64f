pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the single-page App
pub use pages::home::App;
