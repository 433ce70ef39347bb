pub mod about_section;
pub mod button;
pub mod contact_section;
pub mod footer;
pub mod home_section;
pub mod language_toggle;
pub mod nav_bar;
pub mod project_modal;
pub mod projects_section;
pub mod resume_section;
pub mod skills_section;

pub trait AppComponent {
    type Context;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui);
}

/// URI for a file under the bundled `assets/` directory, loadable by the
/// egui_extras image loaders.
pub fn asset_uri(path: &str) -> String {
    format!("file://assets/{}", path)
}
