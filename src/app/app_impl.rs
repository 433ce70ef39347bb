use eframe::egui;

use super::App;
use crate::app::components::{
    about_section::AboutSection, contact_section::ContactSection, footer::Footer,
    home_section::HomeSection, nav_bar::NavBar, project_modal::ProjectModal,
    projects_section::ProjectsSection, resume_section::ResumeSection,
    skills_section::SkillsSection, AppComponent,
};

impl eframe::App for App {
    fn on_exit(&mut self, _ctx: Option<&eframe::glow::Context>) {
        // Final writer on the scroll lock: tearing down with the modal
        // open must not leave the lock set
        self.close_project();
        tracing::info!("exiting");
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("Navigation")
            .show_separator_line(true)
            .show(ctx, |ui| {
                NavBar::add(self, ui);
            });

        egui::TopBottomPanel::bottom("Footer").show(ctx, |ui| {
            Footer::add(self, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // The page is one vertical scroll; it freezes while the
            // project modal is open
            egui::ScrollArea::vertical()
                .enable_scrolling(!self.scroll_locked())
                .show(ui, |ui| {
                    HomeSection::add(self, ui);
                    SkillsSection::add(self, ui);
                    AboutSection::add(self, ui);
                    ResumeSection::add(self, ui);
                    ProjectsSection::add(self, ui);
                    ContactSection::add(self, ui);
                });

            ProjectModal::add(self, ui);
        });
    }
}
