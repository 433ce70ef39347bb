use super::{asset_uri, AppComponent};
use crate::app::content::{RESUME_DOCS, RESUME_MESSAGE, RESUME_TITLE};
use crate::app::{App, SectionId};
use eframe::egui::{self, RichText};

pub struct ResumeSection;

impl AppComponent for ResumeSection {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let title = ui.heading(RichText::new(*RESUME_TITLE.get(ctx.language)).size(24.0));
        if ctx.take_scroll_request(SectionId::Resume) {
            title.scroll_to_me(Some(egui::Align::Min));
        }
        ui.add_space(12.0);

        ui.label(*RESUME_MESSAGE.get(ctx.language));
        ui.add_space(12.0);

        for doc in RESUME_DOCS {
            let button = ui
                .add(
                    egui::Button::new(RichText::new(doc.title).strong())
                        .min_size(egui::vec2(280.0, 40.0))
                        .corner_radius(20.0),
                )
                .on_hover_text("Download");
            if button.clicked() {
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(asset_uri(doc.doc_path)));
            }
            ui.add_space(6.0);
        }
        ui.add_space(24.0);
    }
}
