use std::fmt;

/// Height reserved by the fixed navigation bar. A section counts as active
/// this many pixels before its top edge reaches the top of the viewport.
pub const NAV_LEAD_IN: f64 = 100.0;

/// The page sections, in the order they are stacked on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

/// Registry order. Resolution walks this slice front to back.
pub const SECTIONS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

impl SectionId {
    /// Element id of the rendered `<section>`.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Live layout of a section, measured from the top of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub offset_top: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    /// `offset_top - lead_in <= scroll_y < offset_top + height - lead_in`
    pub fn is_active_at(&self, scroll_y: f64) -> bool {
        let start = self.offset_top - NAV_LEAD_IN;
        let end = self.offset_top + self.height - NAV_LEAD_IN;
        scroll_y >= start && scroll_y < end
    }
}

/// Finds the section that should be highlighted for `scroll_y`.
///
/// `geometry` is queried once per section in registry order; sections it
/// cannot measure are skipped. When several windows contain `scroll_y` the
/// last one in registry order wins. `None` means nothing matched and the
/// caller should keep whatever it had before.
pub fn resolve_active<F>(scroll_y: f64, mut geometry: F) -> Option<SectionId>
where
    F: FnMut(SectionId) -> Option<Geometry>,
{
    let mut active = None;
    for section in SECTIONS {
        if let Some(g) = geometry(section) {
            if g.is_active_at(scroll_y) {
                active = Some(section);
            }
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_layout(section: SectionId) -> Option<Geometry> {
        let g = match section {
            SectionId::Home => Geometry::new(0.0, 900.0),
            SectionId::About => Geometry::new(900.0, 1000.0),
            SectionId::Skills => Geometry::new(1900.0, 800.0),
            SectionId::Projects => Geometry::new(2700.0, 700.0),
            SectionId::Contact => Geometry::new(3400.0, 900.0),
        };
        Some(g)
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
        assert_eq!(SECTIONS[0], SectionId::Home);
    }

    #[test]
    fn test_ids_and_anchors() {
        let ids = SECTIONS.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "skills", "projects", "contact"]);
        assert_eq!(SectionId::Projects.href(), "#projects");
        assert_eq!(SectionId::Skills.to_string(), "skills");
        assert_eq!(SectionId::Contact.label(), "Contact");
    }

    #[test]
    fn test_activation_window_edges() {
        let g = Geometry::new(500.0, 800.0);
        assert!(g.is_active_at(410.0));
        assert!(g.is_active_at(409.0));
        // lower bound is inclusive
        assert!(g.is_active_at(400.0));
        assert!(!g.is_active_at(399.0));
        assert!(g.is_active_at(1199.0));
        assert!(!g.is_active_at(1200.0));
    }

    #[test]
    fn test_resolve_stacked_sections() {
        assert_eq!(resolve_active(0.0, stacked_layout), Some(SectionId::Home));
        assert_eq!(resolve_active(799.0, stacked_layout), Some(SectionId::Home));
        assert_eq!(resolve_active(800.0, stacked_layout), Some(SectionId::About));
        assert_eq!(
            resolve_active(2650.0, stacked_layout),
            Some(SectionId::Projects)
        );
        assert_eq!(
            resolve_active(4199.0, stacked_layout),
            Some(SectionId::Contact)
        );
    }

    #[test]
    fn test_last_match_wins() {
        // about and skills both cover y=1000
        let overlapping = |section| match section {
            SectionId::About => Some(Geometry::new(600.0, 1000.0)),
            SectionId::Skills => Some(Geometry::new(1000.0, 1000.0)),
            _ => None,
        };
        assert_eq!(resolve_active(1000.0, overlapping), Some(SectionId::Skills));
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(resolve_active(4200.0, stacked_layout), None);
        assert_eq!(resolve_active(-150.0, stacked_layout), None);
    }

    #[test]
    fn test_missing_geometry_is_skipped() {
        let no_skills = |section| {
            if section == SectionId::Skills {
                None
            } else {
                stacked_layout(section)
            }
        };
        assert_eq!(resolve_active(2000.0, no_skills), None);
        assert_eq!(resolve_active(1000.0, no_skills), Some(SectionId::About));
        assert_eq!(resolve_active(10.0, |_| None), None);
    }

    #[test]
    fn test_every_section_is_measured_each_time() {
        let mut seen = Vec::new();
        resolve_active(0.0, |section| {
            seen.push(section);
            stacked_layout(section)
        });
        assert_eq!(seen, SECTIONS.to_vec());
    }
}
