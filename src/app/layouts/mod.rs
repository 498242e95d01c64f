pub mod desktop;
pub mod mobile;
pub mod responsive;

pub use desktop::DesktopChrome;
pub use mobile::MobileChrome;
pub use responsive::{ChromeKind, ResponsiveChrome, chrome_for};
