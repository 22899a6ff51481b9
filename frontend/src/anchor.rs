/// In-page sections reachable from the navigation bar and quick links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Services,
        Anchor::Portfolio,
        Anchor::Contact,
    ];

    /// Element id the section renders with.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Portfolio => "portfolio",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Services => "Services",
            Anchor::Portfolio => "Portfolio",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Parses `#about` style fragments. The leading `#` is optional.
    pub fn from_href(href: &str) -> Option<Anchor> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }

    /// Selector for the elements a section marks for reveal.
    pub fn reveal_selector(self) -> String {
        format!("#{} [data-reveal]", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hrefs_round_trip_through_from_href() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_href(&anchor.href()), Some(anchor));
        }
    }

    #[test]
    fn from_href_accepts_bare_ids_and_rejects_unknown() {
        assert_eq!(Anchor::from_href("contact"), Some(Anchor::Contact));
        assert_eq!(Anchor::from_href("#blog"), None);
        assert_eq!(Anchor::from_href(""), None);
    }

    #[test]
    fn reveal_selector_is_scoped_to_the_section() {
        assert_eq!(Anchor::Services.reveal_selector(), "#services [data-reveal]");
    }
}
