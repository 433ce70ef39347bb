use super::button::ActionButton;
use super::{asset_uri, AppComponent};
use crate::app::content::{BTN_VIEW_LESS, BTN_VIEW_MORE, PROJECTS, PROJECTS_TITLE};
use crate::app::style;
use crate::app::{App, SectionId};
use eframe::egui::{self, Color32, RichText};

pub struct ProjectsSection;

impl AppComponent for ProjectsSection {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let title = ui.heading(RichText::new(*PROJECTS_TITLE.get(ctx.language)).size(24.0));
        if ctx.take_scroll_request(SectionId::Projects) {
            title.scroll_to_me(Some(egui::Align::Min));
        }
        ui.add_space(12.0);

        // A pure slice of the static list: 0..3 always, the rest only
        // while expanded
        let visible = ctx.visible_project_count();

        ui.horizontal_wrapped(|ui| {
            for (idx, card) in PROJECTS.iter().take(visible).enumerate() {
                ui.push_id(idx, |ui| {
                    let response = egui::Frame::group(ui.style())
                        .corner_radius(12.0)
                        .show(ui, |ui| {
                            ui.set_width(280.0);
                            ui.vertical(|ui| {
                                ui.add(
                                    egui::Image::new(asset_uri(card.image_path))
                                        .fit_to_exact_size(egui::vec2(280.0, 160.0))
                                        .corner_radius(8.0),
                                );
                                ui.heading(RichText::new(card.title).size(17.0));
                                ui.label(
                                    RichText::new(*card.description.get(ctx.language))
                                        .color(Color32::GRAY),
                                );
                                tag_row(ui, card.tags);
                            });
                        })
                        .response
                        .interact(egui::Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);

                    if response.clicked() {
                        ctx.open_project(idx);
                    }
                });
                ui.add_space(10.0);
            }
        });
        ui.add_space(12.0);

        let toggle_label = if ctx.projects_expanded {
            BTN_VIEW_LESS.get(ctx.language)
        } else {
            BTN_VIEW_MORE.get(ctx.language)
        };
        if ActionButton::primary(toggle_label).show(ui).clicked() {
            // Collapsing also jumps back to the top of the section,
            // mirroring the original's anchor link
            if ctx.projects_expanded {
                ctx.navigate_to(SectionId::Projects);
            }
            ctx.toggle_projects();
        }
        ui.add_space(24.0);
    }
}

pub(super) fn tag_row(ui: &mut egui::Ui, tags: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            egui::Frame::NONE
                .fill(style::TAG)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(RichText::new(*tag).size(12.0).color(Color32::WHITE));
                });
            ui.add_space(4.0);
        }
    });
}
