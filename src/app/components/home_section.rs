use super::button::ActionButton;
use super::{asset_uri, AppComponent};
use crate::app::content::{
    BTN_CONTACT, EMAIL_URL, HERO_NAME, HOME_CATCH_PHRASE, HOME_DESCRIPTION, HOME_JOB,
};
use crate::app::style;
use crate::app::{App, SectionId};
use eframe::egui::{self, RichText};

pub struct HomeSection;

impl AppComponent for HomeSection {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let title = ui.add(
            egui::Label::new(
                RichText::new(HERO_NAME)
                    .size(44.0)
                    .strong()
                    .color(style::ACCENT),
            )
            .selectable(false),
        );
        if ctx.take_scroll_request(SectionId::Home) {
            title.scroll_to_me(Some(egui::Align::Min));
        }

        ui.label(
            RichText::new(*HOME_JOB.get(ctx.language))
                .size(30.0)
                .color(style::ACCENT),
        );
        ui.add_space(8.0);

        ui.add(
            egui::Image::new(asset_uri("header/banner.png"))
                .fit_to_exact_size(egui::vec2(420.0, 420.0))
                .corner_radius(8.0),
        );
        ui.add_space(8.0);

        if ActionButton::primary(BTN_CONTACT.get(ctx.language))
            .show(ui)
            .clicked()
        {
            ui.ctx().open_url(egui::OpenUrl::new_tab(EMAIL_URL));
        }
        ui.add_space(8.0);

        for line in *HOME_DESCRIPTION.get(ctx.language) {
            ui.label(RichText::new(*line).size(15.0));
        }
        ui.add_space(6.0);

        ui.label(*HOME_CATCH_PHRASE.get(ctx.language));
        ui.add_space(24.0);
    }
}
