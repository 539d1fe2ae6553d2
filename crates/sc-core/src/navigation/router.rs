use std::fmt::Debug;

/// A closed, ordered set of sections. The first entry is the default.
pub trait SectionSet: Copy + Eq + Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Stable identifier used in navigation requests.
    fn id(self) -> &'static str;

    /// Display label for nav items and page titles.
    fn label(self) -> &'static str;

    fn default_section() -> Self {
        Self::ALL[0]
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|section| section.id() == id)
    }
}

/// Holds the active section of one app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRouter<S: SectionSet> {
    active: S,
}

impl<S: SectionSet> SectionRouter<S> {
    pub fn new() -> Self {
        Self {
            active: S::default_section(),
        }
    }

    /// Activates `section_id`; an unknown id activates the default section.
    /// Returns the section that ended up active.
    pub fn select(&mut self, section_id: &str) -> S {
        self.active = S::from_id(section_id).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::warn!(section_id, "unknown section, falling back to default");
            S::default_section()
        });
        self.active
    }

    pub fn select_section(&mut self, section: S) {
        self.active = section;
    }

    pub fn current(&self) -> S {
        self.active
    }

    pub fn is_active(&self, section: S) -> bool {
        self.active == section
    }

    /// Ordered `(id, label)` pairs for rendering the nav.
    pub fn sections(&self) -> Vec<(&'static str, &'static str)> {
        S::ALL
            .iter()
            .map(|section| (section.id(), section.label()))
            .collect()
    }

    pub fn title(&self) -> &'static str {
        self.active.label()
    }
}

impl<S: SectionSet> Default for SectionRouter<S> {
    fn default() -> Self {
        Self::new()
    }
}
