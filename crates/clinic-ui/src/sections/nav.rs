//! Navigation bar entries

use serde::Serialize;

/// One navigation link bound to a section index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub index: usize,
}

/// Page sections in order
pub const NAVIGATION_ITEMS: [NavItem; 7] = [
    NavItem { label: "Home", index: 0 },
    NavItem { label: "Expertise", index: 1 },
    NavItem { label: "Publications", index: 2 },
    NavItem { label: "About", index: 3 },
    NavItem { label: "Gallery", index: 4 },
    NavItem { label: "Appointments", index: 5 },
    NavItem { label: "Contact", index: 6 },
];

/// Find a navigation item by its label (case-insensitive)
pub fn item_by_label(label: &str) -> Option<&'static NavItem> {
    NAVIGATION_ITEMS
        .iter()
        .find(|item| item.label.eq_ignore_ascii_case(label))
}
