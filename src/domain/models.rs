use serde::Serialize;

/// A single navigation menu entry.
///
/// `target` is `None` for the active "Home" item, which is rendered as a
/// plain anchor without a destination. `same_tab` controls whether the link
/// opens in the current tab or a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: Option<&'static str>,
    pub same_tab: bool,
}

/// The fixed navigation list, rendered by both desktop and mobile chrome.
pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        label: "Home",
        target: None,
        same_tab: true,
    },
    NavEntry {
        label: "My Book List",
        target: Some("https://goodreads.com/hungcq"),
        same_tab: false,
    },
    NavEntry {
        label: "My DotaBuff",
        target: Some("https://dotabuff.com/players/87907151"),
        same_tab: false,
    },
    NavEntry {
        label: "My Linkedin",
        target: Some("https://linkedin.com/in/hungcq/"),
        same_tab: false,
    },
    NavEntry {
        label: "My Github",
        target: Some("https://github.com/hungcq/"),
        same_tab: false,
    },
];

/// A showcased project: linked title plus a one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub link: &'static str,
    pub subtitle: &'static str,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Order Status",
        link: "https://tracuusinbad.com/order-status",
        subtitle: "Order Tracking System for Sinbad Logistic",
    },
    Project {
        title: "Report Generator",
        link: "http://18.140.67.5:3000/",
        subtitle: "Report Generator for Dong Anh Hospital",
    },
];

/// Site identity used by the heading and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteProfile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub photo: &'static str,
    pub services: [&'static str; 2],
}

pub const PROFILE: SiteProfile = SiteProfile {
    name: "Hung Chu (hungcq)",
    short_name: "Hung Chu",
    tagline: "Software Engineer, Reader, DotA 2 Player",
    role: "Software Engineer at Shopee Singapore",
    email: "hungcq1996@gmail.com",
    phone: "+84987134200",
    photo: "/my-face.jpg",
    services: [
        "Building simple web applications",
        "Design distributed systems",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_list_has_five_entries_in_fixed_order() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            [
                "Home",
                "My Book List",
                "My DotaBuff",
                "My Linkedin",
                "My Github"
            ]
        );
    }

    #[test]
    fn nav_destinations_are_literal() {
        assert_eq!(NAV_ENTRIES[0].target, None);
        assert_eq!(NAV_ENTRIES[1].target, Some("https://goodreads.com/hungcq"));
        assert_eq!(
            NAV_ENTRIES[2].target,
            Some("https://dotabuff.com/players/87907151")
        );
        assert_eq!(
            NAV_ENTRIES[3].target,
            Some("https://linkedin.com/in/hungcq/")
        );
        assert_eq!(NAV_ENTRIES[4].target, Some("https://github.com/hungcq/"));
    }

    #[test]
    fn only_home_opens_in_the_same_tab() {
        assert!(NAV_ENTRIES[0].same_tab);
        for entry in &NAV_ENTRIES[1..] {
            assert!(!entry.same_tab, "{} should open in a new tab", entry.label);
        }
    }

    #[test]
    fn project_showcase_has_two_literal_cards() {
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(PROJECTS[0].title, "Order Status");
        assert_eq!(PROJECTS[0].link, "https://tracuusinbad.com/order-status");
        assert_eq!(PROJECTS[1].title, "Report Generator");
        assert_eq!(PROJECTS[1].link, "http://18.140.67.5:3000/");
    }

    #[test]
    fn nav_entry_serializes_with_expected_shape() {
        let json = serde_json::to_value(NAV_ENTRIES[1]).unwrap();
        assert_eq!(json["label"], "My Book List");
        assert_eq!(json["target"], "https://goodreads.com/hungcq");
        assert_eq!(json["same_tab"], false);
    }
}
