use super::button::ActionButton;
use super::{asset_uri, AppComponent};
use crate::app::content::{
    ABOUT_BODY, ABOUT_SOCIAL_HEADING, ABOUT_STACK, ABOUT_TECH, ABOUT_TECH_HEADING, ABOUT_TITLE,
    BTN_READ_LESS, BTN_READ_MORE, GITHUB_URL, LINKEDIN_URL,
};
use crate::app::{App, SectionId};
use eframe::egui::{self, RichText};

pub struct AboutSection;

impl AppComponent for AboutSection {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let title = ui.heading(RichText::new(*ABOUT_TITLE.get(ctx.language)).size(24.0));
        if ctx.take_scroll_request(SectionId::About) {
            title.scroll_to_me(Some(egui::Align::Min));
        }
        ui.add_space(12.0);

        ui.label(*ABOUT_BODY.get(ctx.language));
        ui.add_space(8.0);

        // Extra content is only rendered while expanded; the data itself
        // is always in memory
        if ctx.about_expanded {
            ui.heading(RichText::new(ABOUT_TECH_HEADING).size(18.0));
            ui.horizontal_wrapped(|ui| {
                for tech in ABOUT_TECH {
                    ui.add(
                        egui::Image::new(asset_uri(tech.image_path))
                            .fit_to_exact_size(egui::vec2(48.0, 48.0)),
                    )
                    .on_hover_text(tech.name);
                    ui.add_space(6.0);
                }
            });
            ui.add_space(6.0);

            for line in ABOUT_STACK {
                ui.label(*line);
            }
            ui.add_space(8.0);

            ui.heading(RichText::new(ABOUT_SOCIAL_HEADING).size(18.0));
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Image::new(asset_uri("socials/linkedin.png"))
                            .fit_to_exact_size(egui::vec2(44.0, 44.0))
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text("LinkedIn")
                    .clicked()
                {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(LINKEDIN_URL));
                }
                if ui
                    .add(
                        egui::Image::new(asset_uri("socials/github.png"))
                            .fit_to_exact_size(egui::vec2(44.0, 44.0))
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text("Github")
                    .clicked()
                {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(GITHUB_URL));
                }
            });
            ui.add_space(8.0);
        }

        let toggle_label = if ctx.about_expanded {
            BTN_READ_LESS.get(ctx.language)
        } else {
            BTN_READ_MORE.get(ctx.language)
        };
        if ActionButton::secondary(toggle_label).show(ui).clicked() {
            ctx.toggle_about();
        }
        ui.add_space(24.0);
    }
}
