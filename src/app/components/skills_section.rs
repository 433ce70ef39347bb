use super::{asset_uri, AppComponent};
use crate::app::content::{SKILLS, SKILLS_TITLE};
use crate::app::{App, SectionId};
use eframe::egui::{self, RichText};

pub struct SkillsSection;

impl AppComponent for SkillsSection {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let title = ui.heading(RichText::new(*SKILLS_TITLE.get(ctx.language)).size(24.0));
        if ctx.take_scroll_request(SectionId::Skills) {
            title.scroll_to_me(Some(egui::Align::Min));
        }
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for skill in SKILLS {
                ui.vertical(|ui| {
                    ui.add(
                        egui::Image::new(asset_uri(skill.image_path))
                            .fit_to_exact_size(egui::vec2(110.0, 110.0)),
                    );
                    ui.label(RichText::new(skill.name).strong());
                });
                ui.add_space(16.0);
            }
        });
        ui.add_space(24.0);
    }
}
