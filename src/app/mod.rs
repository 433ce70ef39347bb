use i18n::Language;

pub mod content;
pub mod i18n;

mod app_impl;
mod components;
mod style;

pub use content::{ProjectCard, PROJECTS};

// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Cards shown in the Projects section while it is collapsed.
pub const COLLAPSED_PROJECT_COUNT: usize = 3;

/// The page's sections, in their fixed vertical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Skills,
    About,
    Resume,
    Projects,
    Contact,
}

impl SectionId {
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Home,
            SectionId::Skills,
            SectionId::About,
            SectionId::Resume,
            SectionId::Projects,
            SectionId::Contact,
        ]
    }
}

/// Root application state. Owns the single source of truth for the
/// language; every section reads it, only `toggle_language` writes it.
/// Each section's expansion/selection state is a private latch with no
/// cross-section sharing.
pub struct App {
    pub language: Language,

    // Navigation menu latch
    pub menu_open: bool,

    // Expandable sections
    pub about_expanded: bool,
    pub projects_expanded: bool,

    // Project detail modal: index into `content::PROJECTS`, or none
    pub selected_project: Option<usize>,

    // Pending anchor navigation, consumed by the section that matches
    pub scroll_target: Option<SectionId>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            language: Language::English,
            menu_open: false,
            about_expanded: false,
            projects_expanded: false,
            selected_project: None,
            scroll_target: None,
        }
    }
}

impl App {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    // Language

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        tracing::info!("Language switched to {}", self.language.code());
    }

    // Navigation menu

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// No-op when the menu is already closed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A navigation link was activated: close the menu and scroll the
    /// matching section into view.
    pub fn navigate_to(&mut self, section: SectionId) {
        self.close_menu();
        self.scroll_target = Some(section);
        tracing::debug!("Navigating to {:?}", section);
    }

    /// Consume a pending scroll request for `section`, if any.
    pub fn take_scroll_request(&mut self, section: SectionId) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }

    // Expandable sections

    pub fn toggle_about(&mut self) {
        self.about_expanded = !self.about_expanded;
    }

    pub fn toggle_projects(&mut self) {
        self.projects_expanded = !self.projects_expanded;
    }

    /// How many project cards are rendered right now: the first three
    /// always, the rest only when expanded.
    pub fn visible_project_count(&self) -> usize {
        let total = PROJECTS.len();
        if self.projects_expanded {
            total
        } else {
            total.min(COLLAPSED_PROJECT_COUNT)
        }
    }

    // Project detail modal

    /// Select `idx` for the detail view, replacing any previous selection.
    pub fn open_project(&mut self, idx: usize) {
        debug_assert!(idx < PROJECTS.len());
        self.selected_project = Some(idx);
        tracing::debug!("Opened project {}", idx);
    }

    pub fn close_project(&mut self) {
        self.selected_project = None;
    }

    /// Background scrolling is locked exactly while the modal is open.
    /// Recomputed every frame, so no exit path can leave it stuck.
    pub fn scroll_locked(&self) -> bool {
        self.selected_project.is_some()
    }
}

// Include the version info module generated at build time
pub mod version_info {
    include!(concat!(env!("OUT_DIR"), "/version_info.rs"));

    // Return formatted version string with commit hash
    pub fn formatted_version() -> String {
        format!("Version {} ({})", VERSION, GIT_HASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_sections_keep_their_fixed_order() {
        assert_eq!(
            SectionId::all(),
            &[
                SectionId::Home,
                SectionId::Skills,
                SectionId::About,
                SectionId::Resume,
                SectionId::Projects,
                SectionId::Contact,
            ]
        );
    }

    #[test]
    fn language_toggle_is_reversible() {
        let mut app = App::new(Language::English);

        app.toggle_language();
        assert_eq!(app.language, Language::Japanese);

        app.toggle_language();
        assert_eq!(app.language, Language::English);
    }

    #[test]
    fn menu_latch() {
        let mut app = App::default();
        assert!(!app.menu_open);

        app.toggle_menu();
        assert!(app.menu_open);

        // Outside click closes the open menu
        app.close_menu();
        assert!(!app.menu_open);

        // Outside click while closed stays closed
        app.close_menu();
        assert!(!app.menu_open);
    }

    #[test]
    fn navigation_link_closes_menu_and_requests_scroll() {
        let mut app = App::default();
        app.toggle_menu();

        app.navigate_to(SectionId::Projects);

        assert!(!app.menu_open);
        assert!(!app.take_scroll_request(SectionId::About));
        assert!(app.take_scroll_request(SectionId::Projects));
        // The request is consumed
        assert!(!app.take_scroll_request(SectionId::Projects));
    }

    #[test]
    fn sections_start_collapsed_and_expansion_is_reversible() {
        let mut app = App::default();
        assert!(!app.about_expanded);
        assert!(!app.projects_expanded);

        app.toggle_about();
        assert!(app.about_expanded);
        app.toggle_about();
        assert!(!app.about_expanded);

        // Collapse-then-expand lands in the same state as a fresh expand
        app.toggle_projects();
        let first = app.visible_project_count();
        app.toggle_projects();
        app.toggle_projects();
        assert_eq!(app.visible_project_count(), first);
    }

    #[test]
    fn project_slicing() {
        let mut app = App::default();
        let total = PROJECTS.len();
        assert!(total > COLLAPSED_PROJECT_COUNT);

        assert_eq!(app.visible_project_count(), COLLAPSED_PROJECT_COUNT);

        app.toggle_projects();
        assert_eq!(app.visible_project_count(), total);

        // Rendering always slices from the front of the static list, so
        // the first three cards are identical in either state.
        app.toggle_projects();
        assert_eq!(app.visible_project_count(), COLLAPSED_PROJECT_COUNT);
    }

    #[test]
    fn modal_selection_replaces_and_locks_scroll() {
        let mut app = App::default();
        assert!(!app.scroll_locked());

        app.open_project(0);
        assert_eq!(app.selected_project, Some(0));
        assert!(app.scroll_locked());

        // Opening another card replaces the selection, no stacking
        app.open_project(2);
        assert_eq!(app.selected_project, Some(2));
        assert!(app.scroll_locked());

        app.close_project();
        assert_eq!(app.selected_project, None);
        assert!(!app.scroll_locked());
    }
}
