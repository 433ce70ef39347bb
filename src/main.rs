pub use crate::app::App;

use eframe::egui;

use crate::app::i18n::Language;
use crate::app::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

mod app;

// Load the app icon from multiple possible locations
fn get_app_icon() -> Option<egui::IconData> {
    // Development path and bundled-app paths
    let icon_paths = [
        "./assets/icons/icon.png",
        "../assets/icons/icon.png",
        "../Resources/assets/icons/icon.png",
    ];

    for path in icon_paths {
        if let Ok(icon) = image::open(path) {
            let icon = icon.to_rgba8();
            let (width, height) = icon.dimensions();
            return Some(egui::IconData {
                rgba: icon.into_raw(),
                width,
                height,
            });
        }
    }

    tracing::warn!("Could not load app icon from any path");
    None
}

// Register a system font with Japanese coverage so the jp half of every
// localized record renders. Falls back to a generic sans-serif.
fn load_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let source = font_kit::source::SystemSource::new();

    let font_names: Vec<&str> = match std::env::consts::OS {
        "macos" => vec!["Hiragino Sans", "Hiragino Kaku Gothic ProN", "Osaka"],
        "windows" => vec!["Yu Gothic UI", "Meiryo", "MS Gothic"],
        _ => vec!["Noto Sans CJK JP", "Noto Sans JP", "TakaoGothic"],
    };

    let mut found_font = false;
    for font_name in font_names {
        if let Ok(family_handle) = source.select_family_by_name(font_name) {
            if let Some(font_handle) = family_handle.fonts().first() {
                if let Ok(font_data) = match font_handle {
                    font_kit::handle::Handle::Memory { bytes, .. } => Ok(bytes.to_vec()),
                    font_kit::handle::Handle::Path { path, .. } => std::fs::read(path),
                } {
                    const JP_FONT_NAME: &str = "SystemJapaneseFont";
                    fonts.font_data.insert(
                        JP_FONT_NAME.to_owned(),
                        egui::FontData::from_owned(font_data).into(),
                    );

                    // Primary proportional font, monospace fallback
                    fonts
                        .families
                        .get_mut(&egui::FontFamily::Proportional)
                        .unwrap()
                        .insert(0, JP_FONT_NAME.to_owned());
                    fonts
                        .families
                        .get_mut(&egui::FontFamily::Monospace)
                        .unwrap()
                        .push(JP_FONT_NAME.to_owned());

                    tracing::info!("Using system font '{}' for Japanese text", font_name);
                    found_font = true;
                    break;
                }
            }
        }
    }

    if !found_font {
        if let Ok(font_handle) = source.select_best_match(
            &[font_kit::family_name::FamilyName::SansSerif],
            &font_kit::properties::Properties::new(),
        ) {
            if let Ok(font_data) = match font_handle {
                font_kit::handle::Handle::Memory { bytes, .. } => Ok(bytes.to_vec()),
                font_kit::handle::Handle::Path { path, .. } => std::fs::read(&path),
            } {
                const SYSTEM_FONT_NAME: &str = "SystemFont";
                fonts.font_data.insert(
                    SYSTEM_FONT_NAME.to_owned(),
                    egui::FontData::from_owned(font_data).into(),
                );
                fonts
                    .families
                    .get_mut(&egui::FontFamily::Proportional)
                    .unwrap()
                    .insert(0, SYSTEM_FONT_NAME.to_owned());

                tracing::warn!("No Japanese font found, using generic system font");
            } else {
                tracing::warn!("Could not load system font data, using defaults");
            }
        } else {
            tracing::warn!("Could not find suitable system font, using defaults");
        }
    }

    ctx.set_fonts(fonts);
}

fn main() {
    tracing_subscriber::fmt::init();
    tracing::info!("App booting...");

    // Language is re-detected from the host locale at every startup; the
    // selection is deliberately not persisted
    let language = Language::detect();
    let app = App::new(language);

    let mut native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT])
            .with_min_inner_size([360.0, 400.0])
            .with_title("jiro jasmin | Front-End Web Developer"),
        ..Default::default()
    };

    if let Some(icon) = get_app_icon() {
        native_options.viewport = native_options.viewport.with_icon(icon);
    }

    eframe::run_native(
        "Jiro Jasmin Portfolio",
        native_options,
        Box::new(|cc| {
            // Image loaders for the skill, project, and social images
            egui_extras::install_image_loaders(&cc.egui_ctx);
            load_fonts(&cc.egui_ctx);

            Ok(Box::new(app))
        }),
    )
    .expect("eframe failed to start");
}
