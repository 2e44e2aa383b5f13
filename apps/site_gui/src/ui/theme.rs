//! Palette and visuals for the black-and-gold site look.

use eframe::egui;

pub const GOLD: egui::Color32 = egui::Color32::from_rgb(212, 175, 55);
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(5, 5, 5);
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(17, 17, 17);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(38, 38, 38);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(237, 237, 237);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(140, 140, 140);

/// Widths below this get the hamburger menu and stacked sections.
pub const MOBILE_BREAKPOINT: f32 = 768.0;
pub const HEADER_HEIGHT: f32 = 72.0;
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

pub fn is_narrow(width: f32) -> bool {
    width < MOBILE_BREAKPOINT
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = f32::from(channel);
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn site_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(TEXT);
    visuals.window_fill = SURFACE;
    visuals.panel_fill = BACKGROUND;
    visuals.extreme_bg_color = SURFACE;
    visuals.faint_bg_color = egui::Color32::from_rgb(12, 12, 12);
    visuals.hyperlink_color = GOLD;
    visuals.selection.bg_fill = GOLD.gamma_multiply(0.6);
    visuals.selection.stroke = egui::Stroke::new(1.0, GOLD);
    visuals.window_corner_radius = egui::CornerRadius::same(12);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.bg_fill = SURFACE;
    visuals.widgets.inactive.weak_bg_fill = SURFACE;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_fill = lighten_color(SURFACE, 0.08);
    visuals.widgets.hovered.weak_bg_fill = lighten_color(SURFACE, 0.08);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, GOLD);
    visuals.widgets.active.bg_fill = GOLD;
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, GOLD);
    visuals
}

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(site_visuals());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(12.0, 10.0);
        style.spacing.button_padding = egui::vec2(18.0, 10.0);
        if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            body.size = 15.0;
        }
        if let Some(button) = style.text_styles.get_mut(&egui::TextStyle::Button) {
            button.size = 14.0;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_color_moves_toward_white_and_keeps_alpha() {
        let base = egui::Color32::from_rgba_unmultiplied(100, 0, 200, 255);
        assert_eq!(lighten_color(base, 0.0), base);
        assert_eq!(
            lighten_color(base, 1.0),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 255)
        );
        assert_eq!(lighten_color(base, 2.0), lighten_color(base, 1.0));
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_narrow(767.0));
        assert!(!is_narrow(MOBILE_BREAKPOINT));
    }
}
