//! Navigation targets and page regions.
//!
//! # Responsibility
//! - Enumerate the mutually exclusive views reachable by fragment routing.
//! - Name the page regions the renderer writes into.
//!
//! # Invariants
//! - Unrecognized fragments resolve to `ViewId::Home`, never to an error.
//! - Every view is reachable from every other view directly.

/// One mutually exclusive content region of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewId {
    #[default]
    Home,
    Experience,
    Projects,
    Education,
    Contact,
    Resume,
}

/// Fragment value for the home view.
pub const VIEW_HOME: &str = "home";
/// Fragment value for the experience view.
pub const VIEW_EXPERIENCE: &str = "experience";
/// Fragment value for the projects view.
pub const VIEW_PROJECTS: &str = "projects";
/// Fragment value for the education view.
pub const VIEW_EDUCATION: &str = "education";
/// Fragment value for the contact view.
pub const VIEW_CONTACT: &str = "contact";
/// Fragment value for the resume view.
pub const VIEW_RESUME: &str = "resume";

impl ViewId {
    /// All views in navigation order.
    pub const ALL: [ViewId; 6] = [
        ViewId::Home,
        ViewId::Experience,
        ViewId::Projects,
        ViewId::Education,
        ViewId::Contact,
        ViewId::Resume,
    ];

    /// Stable fragment id (`#<id>`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => VIEW_HOME,
            Self::Experience => VIEW_EXPERIENCE,
            Self::Projects => VIEW_PROJECTS,
            Self::Education => VIEW_EDUCATION,
            Self::Contact => VIEW_CONTACT,
            Self::Resume => VIEW_RESUME,
        }
    }

    /// Parses an exact view id. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            VIEW_HOME => Some(Self::Home),
            VIEW_EXPERIENCE => Some(Self::Experience),
            VIEW_PROJECTS => Some(Self::Projects),
            VIEW_EDUCATION => Some(Self::Education),
            VIEW_CONTACT => Some(Self::Contact),
            VIEW_RESUME => Some(Self::Resume),
            _ => None,
        }
    }

    /// Resolves a URL fragment (with or without the leading `#`).
    ///
    /// Empty and unknown fragments fall back to home.
    pub fn from_fragment(fragment: &str) -> Self {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        Self::parse(id).unwrap_or(Self::Home)
    }

    /// Regions `render_view` writes for this view.
    pub fn content_regions(self) -> &'static [Region] {
        match self {
            Self::Home => &[Region::StatProjects, Region::StatYears, Region::StatAwards],
            Self::Experience => &[Region::ExperienceTimeline],
            Self::Projects => &[Region::TagChips, Region::ProjectsGrid],
            Self::Education => &[Region::EducationCards, Region::CourseworkList],
            Self::Contact => &[],
            Self::Resume => &[Region::ResumeTarget],
        }
    }
}

/// Page region written by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    ExperienceTimeline,
    ProjectsGrid,
    TagChips,
    EducationCards,
    CourseworkList,
    ResumeTarget,
    ModalContent,
    StatProjects,
    StatYears,
    StatAwards,
    KeyboardHelp,
    FooterYear,
}

impl Region {
    /// Element id of the region in the page markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::ExperienceTimeline => "experience-timeline",
            Self::ProjectsGrid => "projects-grid",
            Self::TagChips => "tag-chips",
            Self::EducationCards => "education-cards",
            Self::CourseworkList => "coursework-list",
            Self::ResumeTarget => "resume-target",
            Self::ModalContent => "modal-content",
            Self::StatProjects => "stat-projects",
            Self::StatYears => "stat-years",
            Self::StatAwards => "stat-awards",
            Self::KeyboardHelp => "kbd-help",
            Self::FooterYear => "year",
        }
    }
}

/// Element that can receive keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    View(ViewId),
    ProjectSearch,
}
