use dioxus::prelude::*;
use std::rc::Rc;
use std::str::FromStr;

use crate::shared::errors::AppError;
use crate::shared::hooks::listener::WindowListener;
use crate::shared::logging;

/// Breakpoint table: mobile [0, 768), tablet [768, 1024), computer [1024, ∞).
/// Only the mobile / not-mobile distinction selects a chrome variant.
pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const COMPUTER_MIN_WIDTH: f64 = 1024.0;

// Width assumed when no window exists (native tests, prerender)
const FALLBACK_WIDTH: f64 = 1280.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Computer,
}

impl Breakpoint {
    /// Classify a viewport width against the breakpoint table.
    pub fn classify(width: f64) -> Breakpoint {
        if width < TABLET_MIN_WIDTH {
            Breakpoint::Mobile
        } else if width < COMPUTER_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Computer
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Breakpoint::Mobile)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Computer => "computer",
        }
    }
}

impl FromStr for Breakpoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Breakpoint::Mobile),
            "tablet" => Ok(Breakpoint::Tablet),
            "computer" => Ok(Breakpoint::Computer),
            other => Err(AppError::UnknownBreakpoint(other.to_string())),
        }
    }
}

/// Current window inner width in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> f64 {
    FALLBACK_WIDTH
}

/// Reactive breakpoint signal.
///
/// Classifies the viewport once on mount, then re-classifies on every window
/// `resize` event. The signal only changes when the classification changes,
/// so resizes within one breakpoint band do not re-render anything.
pub fn use_breakpoint() -> Signal<Breakpoint> {
    let mut breakpoint = use_signal(|| Breakpoint::classify(viewport_width()));

    use_hook(|| {
        Rc::new(WindowListener::attach("resize", move || {
            let next = Breakpoint::classify(viewport_width());
            let current = *breakpoint.peek();
            if next != current {
                logging::log_breakpoint_change(current, next);
                breakpoint.set(next);
            }
        }))
    });

    breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_below_768_are_mobile() {
        assert_eq!(Breakpoint::classify(0.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(767.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(767.9), Breakpoint::Mobile);
    }

    #[test]
    fn widths_from_768_to_1023_are_tablet() {
        assert_eq!(Breakpoint::classify(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1023.0), Breakpoint::Tablet);
    }

    #[test]
    fn widths_from_1024_are_computer() {
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Computer);
        assert_eq!(Breakpoint::classify(2560.0), Breakpoint::Computer);
    }

    #[test]
    fn only_mobile_is_mobile() {
        assert!(Breakpoint::Mobile.is_mobile());
        assert!(!Breakpoint::Tablet.is_mobile());
        assert!(!Breakpoint::Computer.is_mobile());
    }

    #[test]
    fn breakpoint_names_round_trip() {
        for bp in [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Computer] {
            assert_eq!(bp.as_str().parse::<Breakpoint>().unwrap(), bp);
        }
    }

    #[test]
    fn unknown_breakpoint_name_is_an_error() {
        let err = "widescreen".parse::<Breakpoint>().unwrap_err();
        assert!(matches!(err, AppError::UnknownBreakpoint(name) if name == "widescreen"));
    }
}
