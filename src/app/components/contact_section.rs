use super::{asset_uri, AppComponent};
use crate::app::content::{
    CONTACT_LINKEDIN_NOTE, CONTACT_MESSAGE, CONTACT_SUBTITLE, CONTACT_TITLE, EMAIL_DISPLAY,
    EMAIL_URL, FULL_NAME, LINKEDIN_URL, TEL_DISPLAY, TEL_URL,
};
use crate::app::{App, SectionId};
use eframe::egui::{self, RichText};

pub struct ContactSection;

impl AppComponent for ContactSection {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let title = ui.heading(RichText::new(*CONTACT_TITLE.get(ctx.language)).size(24.0));
        if ctx.take_scroll_request(SectionId::Contact) {
            title.scroll_to_me(Some(egui::Align::Min));
        }
        ui.add_space(12.0);

        ui.heading(RichText::new(*CONTACT_SUBTITLE.get(ctx.language)).size(18.0));
        ui.label(*CONTACT_MESSAGE.get(ctx.language));
        ui.add_space(12.0);

        contact_row(ui, "socials/phone.png", "Telephone", TEL_DISPLAY, TEL_URL);
        contact_row(ui, "socials/mail.png", "Email", EMAIL_DISPLAY, EMAIL_URL);

        // LinkedIn row carries a localized invitation under the name
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
            ui.vertical(|ui| {
                if ui.link(FULL_NAME).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(LINKEDIN_URL));
                }
                ui.label(RichText::new(*CONTACT_LINKEDIN_NOTE.get(ctx.language)).size(12.0));
            });
        });
        ui.add_space(24.0);
    }
}

fn contact_row(ui: &mut egui::Ui, icon: &str, hover: &str, display: &str, url: &str) {
    ui.horizontal(|ui| {
        if ui
            .add(
                egui::Image::new(asset_uri(icon))
                    .fit_to_exact_size(egui::vec2(44.0, 44.0))
                    .sense(egui::Sense::click()),
            )
            .on_hover_text(hover)
            .clicked()
        {
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }
        if ui.link(display).clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }
    });
    ui.add_space(4.0);
}
