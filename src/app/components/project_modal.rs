use super::button::ActionButton;
use super::projects_section::tag_row;
use super::{asset_uri, AppComponent};
use crate::app::content::{ProjectMedia, BTN_GITHUB, BTN_LIVE_DEMO, PROJECTS};
use crate::app::App;
use eframe::egui::{self, Color32, RichText};

const MEDIA_SIZE: egui::Vec2 = egui::vec2(520.0, 280.0);

/// Detail view for the selected project card. While it is open the page
/// behind it cannot scroll; see `App::scroll_locked`.
pub struct ProjectModal;

impl AppComponent for ProjectModal {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let Some(idx) = ctx.selected_project else {
            return;
        };
        let card = &PROJECTS[idx];
        let mut open = true;

        egui::Window::new(RichText::new(card.title).size(20.0))
            .id(egui::Id::new("project_modal"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ui.ctx(), |ui| {
                ui.set_width(MEDIA_SIZE.x);

                ui.label(
                    RichText::new(*card.description.get(ctx.language)).color(Color32::GRAY),
                );
                tag_row(ui, card.tags);
                ui.add_space(8.0);

                ui.label(*card.features.get(ctx.language));
                ui.add_space(8.0);

                // Media pane: video > live-demo-linked image > plain image
                match card.media() {
                    ProjectMedia::Video { video_id } => {
                        ui.add(
                            egui::Image::new(asset_uri(card.image_path))
                                .fit_to_exact_size(MEDIA_SIZE)
                                .corner_radius(8.0),
                        );
                        if ui.link("▶ Watch the demo video").clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(format!(
                                "https://www.youtube.com/watch?v={}",
                                video_id
                            )));
                        }
                    }
                    ProjectMedia::LinkedImage { image_path, url } => {
                        let image = ui
                            .add(
                                egui::Image::new(asset_uri(image_path))
                                    .fit_to_exact_size(MEDIA_SIZE)
                                    .corner_radius(8.0)
                                    .sense(egui::Sense::click()),
                            )
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .on_hover_text(url);
                        if image.clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                        }
                    }
                    ProjectMedia::Image { image_path } => {
                        ui.add(
                            egui::Image::new(asset_uri(image_path))
                                .fit_to_exact_size(MEDIA_SIZE)
                                .corner_radius(8.0),
                        );
                    }
                }
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ActionButton::secondary(BTN_GITHUB).show(ui).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(card.repo_url));
                    }
                    if let Some(demo) = card.live_demo {
                        if ActionButton::secondary(BTN_LIVE_DEMO).show(ui).clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(demo));
                        }
                    }
                });
            });

        if !open {
            ctx.close_project();
        }
    }
}
