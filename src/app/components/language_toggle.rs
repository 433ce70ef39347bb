use super::AppComponent;
use crate::app::{App, i18n::Language};
use eframe::egui;

/// Flag button showing the language you would switch to, matching the
/// original site's toggler.
pub struct LanguageToggle;

impl AppComponent for LanguageToggle {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let flag = match ctx.language {
            Language::Japanese => "🇬🇧",
            Language::English => "🇯🇵",
        };

        let response = ui
            .add(egui::Button::new(egui::RichText::new(flag).size(18.0)).frame(false))
            .on_hover_text(ctx.language.toggled().name());

        if response.clicked() {
            ctx.toggle_language();
        }
    }
}
