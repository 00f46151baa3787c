use super::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum NavTarget {
    /// Section of the splash page, by element id.
    Section(&'static str),
    Page(Route),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub const fn section(label: &'static str, id: &'static str) -> Self {
        Self {
            label,
            target: NavTarget::Section(id),
        }
    }

    pub const fn page(label: &'static str, route: Route) -> Self {
        Self {
            label,
            target: NavTarget::Page(route),
        }
    }

    /// The link target. The bare splash page is `/` rather than `/#`.
    pub fn href(&self) -> String {
        let href = self.route().to_string();
        match href.strip_suffix('#') {
            Some(bare) => bare.to_string(),
            None => href,
        }
    }

    /// Where following the item leads, fragment included.
    pub fn route(&self) -> Route {
        match &self.target {
            NavTarget::Section(id) => Route::Splash {
                section: id.to_string(),
            },
            NavTarget::Page(route) => route.clone(),
        }
    }

    /// Section links are active on the splash page when the URL targets their section,
    /// page links when their page is showing.
    pub fn is_active(&self, current: &Route) -> bool {
        match &self.target {
            NavTarget::Section(id) => current.section() == Some(*id),
            NavTarget::Page(Route::Splash { .. }) => matches!(current, Route::Splash { .. }),
            NavTarget::Page(route) => current == route,
        }
    }
}

pub const HEADER_ITEMS: [NavItem; 6] = [
    NavItem::section("How it works", "how"),
    NavItem::section("qE Stack", "stack"),
    NavItem::section("Ethics", "ethics"),
    NavItem::page("Early Access", Route::EarlyAccess {}),
    NavItem::page("Technical Overview", Route::TechnicalOverview {}),
    NavItem::page("Partnerships", Route::Partnerships {}),
];

pub const FOOTER_ITEMS: [NavItem; 4] = [
    NavItem::section("About", "what"),
    NavItem::section("Science", "how"),
    NavItem::section("Ethics & Safety", "ethics"),
    NavItem::page("Partnerships", Route::Partnerships {}),
];

/// Strips the leading `#`; an empty fragment is no fragment.
pub fn normalize_fragment(raw: &str) -> Option<&str> {
    let trimmed = raw.strip_prefix('#').unwrap_or(raw);
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAction {
    Stay,
    Top,
    Element(String),
}

/// Where the window scrolls when `route` is entered.
///
/// A fragment naming a missing element leaves the scroll position alone.
pub fn scroll_action(route: &Route, exists: impl Fn(&str) -> bool) -> ScrollAction {
    let Route::Splash { section } = route else {
        return ScrollAction::Stay;
    };

    match normalize_fragment(section) {
        Some(id) if exists(id) => ScrollAction::Element(id.to_string()),
        Some(_) => ScrollAction::Stay,
        None => ScrollAction::Top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use url::{Position, Url};

    const SECTIONS: [&str; 4] = ["what", "how", "stack", "ethics"];

    fn on_page(id: &str) -> bool {
        SECTIONS.contains(&id)
    }

    /// The address bar plus its back stack, resolving routes the way the router does.
    struct Location {
        entries: Vec<Url>,
    }

    impl Location {
        fn open(href: &str) -> Self {
            let base = Url::parse("https://qe.example").unwrap();
            Self {
                entries: vec![base.join(href).unwrap()],
            }
        }

        fn push(&mut self, route: &Route) {
            let next = self.url().join(&route.to_string()).unwrap();
            self.entries.push(next);
        }

        fn back(&mut self) {
            assert!(self.entries.len() > 1, "nothing to go back to");
            self.entries.pop();
        }

        fn url(&self) -> &Url {
            self.entries.last().unwrap()
        }

        fn route(&self) -> Route {
            Route::from_str(&self.url()[Position::BeforePath..]).unwrap()
        }

        fn active_header(&self) -> Vec<&'static str> {
            let route = self.route();
            HEADER_ITEMS
                .iter()
                .filter(|item| item.is_active(&route))
                .map(|item| item.label)
                .collect()
        }
    }

    #[test]
    fn splash_without_fragment_scrolls_to_top() {
        let mut location = Location::open("/technical-overview");
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Stay);

        location.push(&Route::home());
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Top);
    }

    #[test]
    fn splash_fragment_scrolls_to_section() {
        let location = Location::open("/#stack");
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Element("stack".into()));
    }

    #[test]
    fn unknown_section_stays_put() {
        let location = Location::open("/#pricing");
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Stay);
    }

    #[test]
    fn empty_fragment_counts_as_none() {
        assert_eq!(normalize_fragment("#"), None);
        assert_eq!(normalize_fragment(""), None);
        assert_eq!(normalize_fragment("#how"), Some("how"));

        let location = Location::open("/#");
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Top);
    }

    #[test]
    fn section_link_puts_fragment_in_the_address_bar() {
        let mut location = Location::open("/early-access");
        location.push(&HEADER_ITEMS[0].route());

        assert_eq!(location.url().as_str(), "https://qe.example/#how");
        assert_eq!(location.route(), HEADER_ITEMS[0].route());
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Element("how".into()));
        assert_eq!(location.active_header(), ["How it works"]);
    }

    #[test]
    fn back_to_a_section_scrolls_there_again() {
        let mut location = Location::open("/");
        location.push(&HEADER_ITEMS[0].route());
        location.push(&HEADER_ITEMS[5].route());

        assert_eq!(location.url().path(), "/partnerships");
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Stay);
        assert_eq!(location.active_header(), ["Partnerships"]);

        location.back();
        assert_eq!(location.url().fragment(), Some("how"));
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Element("how".into()));
        assert_eq!(location.active_header(), ["How it works"]);

        location.back();
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Top);
        assert!(location.active_header().is_empty());
    }

    #[test]
    fn switching_sections_moves_the_active_item() {
        let mut location = Location::open("/#how");
        location.push(&HEADER_ITEMS[2].route());

        assert_eq!(location.active_header(), ["Ethics"]);
        assert_eq!(scroll_action(&location.route(), on_page), ScrollAction::Element("ethics".into()));
    }

    #[test]
    fn header_links_point_at_pages() {
        let hrefs: Vec<String> = HEADER_ITEMS.iter().map(NavItem::href).collect();
        assert_eq!(
            hrefs,
            ["/#how", "/#stack", "/#ethics", "/early-access", "/technical-overview", "/partnerships"]
        );

        for item in HEADER_ITEMS {
            assert_eq!(item.href(), item.route().to_string());
        }
    }

    #[test]
    fn section_items_need_splash_and_fragment() {
        let how = &HEADER_ITEMS[0];
        let splash = |section: &str| Route::Splash {
            section: section.to_string(),
        };

        assert!(how.is_active(&splash("how")));
        assert!(!how.is_active(&splash("stack")));
        assert!(!how.is_active(&splash("")));
        assert!(!how.is_active(&Route::Partnerships {}));
    }

    #[test]
    fn page_items_follow_route() {
        let partnerships = &HEADER_ITEMS[5];
        assert!(partnerships.is_active(&Route::Partnerships {}));
        assert!(!partnerships.is_active(&Route::EarlyAccess {}));

        let home = NavItem::page("Home", Route::home());
        assert!(home.is_active(&Route::Splash { section: "how".into() }));
        assert_eq!(home.href(), "/");
    }

    #[test]
    fn footer_sections_exist_on_splash() {
        for item in FOOTER_ITEMS {
            if let Some(id) = item.route().section() {
                assert!(on_page(id), "{id} is not a splash section");
            }
        }
    }
}
