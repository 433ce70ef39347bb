use super::button::ActionButton;
use super::language_toggle::LanguageToggle;
use super::AppComponent;
use crate::app::content::{BTN_CONTACT, EMAIL_URL, NAV_MENU};
use crate::app::style;
use crate::app::{App, SectionId};
use eframe::egui::{self, RichText};

/// Width under which the inline links collapse into the burger menu.
const COMPACT_WIDTH: f32 = 620.0;

pub struct NavBar;

impl AppComponent for NavBar {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let wide = ui.max_rect().width() > COMPACT_WIDTH;
        let mut burger_clicked = false;

        ui.horizontal(|ui| {
            // Logo doubles as a back-to-top link
            let logo = ui
                .add(
                    egui::Button::new(
                        RichText::new("JJ").size(26.0).strong().color(style::ACCENT),
                    )
                    .frame(false),
                )
                .on_hover_text("Back to top");
            if logo.clicked() {
                ctx.navigate_to(SectionId::Home);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !wide {
                    let burger = ui
                        .add(egui::Button::new(RichText::new("☰").size(20.0)).frame(false))
                        .on_hover_text("Menu");
                    if burger.clicked() {
                        burger_clicked = true;
                        ctx.toggle_menu();
                    }
                }

                if ActionButton::primary(BTN_CONTACT.get(ctx.language))
                    .small()
                    .show(ui)
                    .clicked()
                {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(EMAIL_URL));
                }

                if wide {
                    LanguageToggle::add(ctx, ui);
                    for item in NAV_MENU.iter().rev() {
                        let link = ui.link(RichText::new(*item.label.get(ctx.language)).size(15.0));
                        if link.clicked() {
                            ctx.navigate_to(item.target);
                        }
                        ui.add_space(6.0);
                    }
                }
            });
        });

        // The inline layout has no latch to keep open
        if wide {
            ctx.close_menu();
        }

        if ctx.menu_open {
            let bar_rect = ui.max_rect();
            let pos = egui::pos2(bar_rect.right() - 190.0, bar_rect.bottom() + 4.0);

            let response = egui::Area::new(egui::Id::new("nav_menu"))
                .order(egui::Order::Foreground)
                .fixed_pos(pos)
                .show(ui.ctx(), |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_min_width(170.0);
                        for item in NAV_MENU {
                            // Selecting a link also closes the menu
                            if ui.link(*item.label.get(ctx.language)).clicked() {
                                ctx.navigate_to(item.target);
                            }
                        }
                        ui.separator();
                        LanguageToggle::add(ctx, ui);
                    });
                })
                .response;

            // Close on any pointer interaction outside the open menu; the
            // burger handled its own click above, so don't double-toggle.
            if response.clicked_elsewhere() && !burger_clicked {
                ctx.close_menu();
            }
        }
    }
}
