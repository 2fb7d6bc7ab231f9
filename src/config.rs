use log::Level;

pub const SITE_NAME: &str = "Awesome Animations";
pub const LOGO_MARK: &str = "A";
pub const CONTACT_RECIPIENT: &str = "hello@awesome-animations.dev";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "Features", anchor: "features" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Contact", anchor: "contact" },
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hrefs_point_at_anchors() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, ["#home", "#features", "#projects", "#contact"]);
    }

    #[test]
    fn anchors_are_lowercase_labels() {
        for item in NAV_ITEMS {
            assert_eq!(item.anchor, item.label.to_lowercase());
        }
    }
}
