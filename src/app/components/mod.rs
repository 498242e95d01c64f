pub mod heading;
pub mod nav_menu;
pub mod project_showcase;

pub use heading::HomepageHeading;
pub use nav_menu::MenuItems;
pub use project_showcase::ProjectShowcase;
