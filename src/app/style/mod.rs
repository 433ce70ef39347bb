use eframe::egui::{vec2, Button, Color32, Stroke};

// Site palette
pub const PRIMARY: Color32 = Color32::from_rgb(0x86, 0x96, 0xFA);
pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(0x79, 0xA4, 0xFF);
pub const SECONDARY: Color32 = Color32::from_rgb(0xA6, 0x92, 0xE8);
pub const SECONDARY_HOVER: Color32 = Color32::from_rgb(0xE5, 0xBC, 0xCF);
pub const ACCENT: Color32 = Color32::from_rgb(0x8F, 0x8C, 0xF7);
pub const TAG: Color32 = Color32::from_rgb(0xA6, 0x6D, 0xD5);

pub trait ButtonExt {
    fn primary_style(self, small: bool) -> Self;
    fn secondary_style(self, hovered: bool) -> Self;
}

impl ButtonExt for Button<'_> {
    fn primary_style(self, small: bool) -> Self {
        let height = if small { 26.0 } else { 34.0 };
        self.min_size(vec2(120.0, height))
            .fill(PRIMARY)
            .stroke(Stroke::NONE)
            .corner_radius(height / 2.0)
    }

    // The secondary fill follows the hover flag, nothing else changes
    fn secondary_style(self, hovered: bool) -> Self {
        let fill = if hovered { SECONDARY_HOVER } else { SECONDARY };
        self.min_size(vec2(120.0, 34.0))
            .fill(fill)
            .stroke(Stroke::NONE)
            .corner_radius(17.0)
    }
}
