use super::{asset_uri, AppComponent};
use crate::app::content::{
    COPYRIGHT, EMAIL_URL, FOOTER_MENU, GITHUB_URL, LINKEDIN_URL, TEL_URL,
};
use crate::app::style;
use crate::app::version_info;
use crate::app::{App, SectionId};
use eframe::egui::{self, Color32, RichText};

pub struct Footer;

impl AppComponent for Footer {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            let logo = ui
                .add(
                    egui::Button::new(RichText::new("JJ").size(18.0).color(style::ACCENT))
                        .frame(false),
                )
                .on_hover_text("Back to top");
            if logo.clicked() {
                ctx.navigate_to(SectionId::Home);
            }

            for item in FOOTER_MENU {
                if ui
                    .link(RichText::new(*item.label.get(ctx.language)).size(13.0))
                    .clicked()
                {
                    ctx.navigate_to(item.target);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                social_icon(ui, "socials/github.png", "Github", GITHUB_URL);
                social_icon(ui, "socials/linkedin.png", "LinkedIn", LINKEDIN_URL);
                social_icon(ui, "socials/phone.png", "Telephone", TEL_URL);
                social_icon(ui, "socials/mail.png", "Email", EMAIL_URL);

                ui.label(
                    RichText::new(format!(
                        "{} · {}",
                        COPYRIGHT,
                        version_info::formatted_version()
                    ))
                    .size(12.0)
                    .color(Color32::GRAY),
                );
            });
        });
    }
}

fn social_icon(ui: &mut egui::Ui, icon: &str, hover: &str, url: &str) {
    if ui
        .add(
            egui::Image::new(asset_uri(icon))
                .fit_to_exact_size(egui::vec2(26.0, 26.0))
                .sense(egui::Sense::click()),
        )
        .on_hover_text(hover)
        .clicked()
    {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
}
