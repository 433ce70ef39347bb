use eframe::egui::{self, Color32, RichText};

use crate::app::style::ButtonExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// The one clickable control every section routes through. Primary and
/// secondary variants share behavior; only the secondary variant tracks
/// pointer hover, and only to pick its fill.
pub struct ActionButton<'a> {
    label: &'a str,
    variant: ButtonVariant,
    small: bool,
}

impl<'a> ActionButton<'a> {
    pub fn primary(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            small: false,
        }
    }

    pub fn secondary(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Secondary,
            small: false,
        }
    }

    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let size = if self.small { 13.0 } else { 15.0 };
        let text = RichText::new(self.label).size(size).color(Color32::WHITE);

        let response = match self.variant {
            ButtonVariant::Primary => {
                ui.add(egui::Button::new(text).primary_style(self.small))
            }
            ButtonVariant::Secondary => {
                // Hover state from the previous frame, kept in egui memory
                let hover_id = ui.id().with(self.label).with("hovered");
                let hovered = ui
                    .memory_mut(|mem| mem.data.get_temp::<bool>(hover_id))
                    .unwrap_or(false);

                let response = ui.add(egui::Button::new(text).secondary_style(hovered));
                ui.memory_mut(|mem| mem.data.insert_temp(hover_id, response.hovered()));
                response
            }
        };

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}
