use eframe::egui;
use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use std::sync::Arc;

/// Loads the first installed family from `candidates`.
fn load_family(source: &SystemSource, candidates: &[&str]) -> Option<Vec<u8>> {
    let families: Vec<FamilyName> = candidates
        .iter()
        .map(|name| FamilyName::Title((*name).to_string()))
        .collect();
    let handle = source.select_best_match(&families, &Properties::default()).ok()?;
    let font = handle.load().ok()?;
    font.copy_font_data().map(|data| data.to_vec())
}

/// The interface renders in Arial; fall back to the common Linux
/// substitutes, and pull in an emoji face for the footer glyph.
pub fn setup_system_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let system_source = SystemSource::new();

    if let Some(font_data) = load_family(
        &system_source,
        &["Arial", "Liberation Sans", "DejaVu Sans", "Helvetica"],
    ) {
        fonts.font_data.insert(
            "arial".to_owned(),
            Arc::from(egui::FontData::from_owned(font_data)),
        );
    }

    if let Some(font_data) = load_family(
        &system_source,
        &["Segoe UI Emoji", "Noto Color Emoji", "Segoe UI Symbol"],
    ) {
        fonts.font_data.insert(
            "emoji".to_owned(),
            Arc::from(egui::FontData::from_owned(font_data)),
        );
    }

    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(priority) = fonts.families.get_mut(&family) {
            for (position, name) in ["arial", "emoji"].iter().enumerate() {
                if fonts.font_data.contains_key(*name) {
                    priority.insert(position, (*name).to_owned());
                }
            }
        }
    }

    ctx.set_fonts(fonts);
}
