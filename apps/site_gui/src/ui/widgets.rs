//! Reusable site widgets: buttons, cards, the dashboard mockup, the marquee
//! strip and the portfolio carousel.

use std::f64::consts::TAU;

use eframe::egui;
use site_core::{content, CarouselInput};

use crate::controller::reducer::{CarouselInteraction, WorkState};
use crate::media::TextureCache;
use crate::ui::theme::{lighten_color, BORDER, GOLD, MUTED, SURFACE, TEXT};

pub const BAR_PERIOD_SECS: f64 = 3.0;
pub const BAR_STAGGER_SECS: f64 = 0.1;
pub const MARQUEE_PERIOD_SECS: f64 = 20.0;

/// Vertical scale of dashboard bar `index` at `time`: 0.5 at the start of
/// each period, 1.0 halfway, eased in and out.
pub fn bar_scale(time: f64, index: usize) -> f32 {
    let local = time - index as f64 * BAR_STAGGER_SECS;
    let phase = local.rem_euclid(BAR_PERIOD_SECS) / BAR_PERIOD_SECS;
    (0.75 - 0.25 * (TAU * phase).cos()) as f32
}

/// Horizontal shift of the marquee strip. One copy of the strip is
/// `copy_width` wide and scrolls fully out once per period.
pub fn marquee_offset(time: f64, copy_width: f32) -> f32 {
    let phase = time.rem_euclid(MARQUEE_PERIOD_SECS) / MARQUEE_PERIOD_SECS;
    -(phase as f32) * copy_width
}

pub fn gold_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label.to_owned())
            .color(egui::Color32::BLACK)
            .strong(),
    )
    .fill(GOLD)
    .stroke(egui::Stroke::NONE)
    .corner_radius(egui::CornerRadius::same(4))
}

pub fn outline_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_owned()).color(TEXT).strong())
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(egui::CornerRadius::same(4))
}

pub fn link_button(label: &str, active: bool) -> egui::Button<'static> {
    let color = if active { GOLD } else { MUTED };
    egui::Button::new(egui::RichText::new(label.to_owned()).color(color))
        .frame(false)
}

pub fn section_heading(ui: &mut egui::Ui, kicker: &str, title: &str) {
    ui.label(egui::RichText::new(kicker).color(GOLD).small().strong());
    ui.label(egui::RichText::new(title).size(36.0).strong());
    ui.add_space(12.0);
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(SURFACE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(24))
}

/// Clickable offering card. Returns true when the card was clicked.
pub fn offering_card(
    ui: &mut egui::Ui,
    offering: &content::Offering,
    call_to_action: Option<&str>,
    large: bool,
) -> bool {
    let title_size = if large { 28.0 } else { 20.0 };
    let inner = card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        if large {
            ui.set_min_height(280.0);
        }
        ui.label(egui::RichText::new(offering.icon.glyph()).size(28.0).color(GOLD));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(offering.title).size(title_size).strong());
        ui.label(egui::RichText::new(offering.description).color(MUTED));
        if let Some(cta) = call_to_action {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(cta).color(GOLD).small().strong());
        }
    });
    let response = ui.interact(
        inner.response.rect,
        ui.id().with(("offering_card", offering.title)),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

pub fn dashboard_mockup(ui: &mut egui::Ui, time: f64, shift: egui::Vec2) {
    let width = ui.available_width().min(520.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 340.0), egui::Sense::hover());
    let rect = rect.translate(shift);
    let painter = ui.painter();

    painter.rect_filled(rect, egui::CornerRadius::same(16), SURFACE);
    let inner = rect.shrink(24.0);

    let metric_width = inner.width() / content::DASHBOARD_METRICS.len() as f32;
    for (i, metric) in content::DASHBOARD_METRICS.iter().enumerate() {
        let left = inner.left() + i as f32 * metric_width;
        let top = inner.top();
        painter.text(
            egui::pos2(left, top),
            egui::Align2::LEFT_TOP,
            metric.label,
            egui::FontId::proportional(11.0),
            MUTED,
        );
        painter.text(
            egui::pos2(left, top + 18.0),
            egui::Align2::LEFT_TOP,
            metric.value,
            egui::FontId::proportional(24.0),
            TEXT,
        );
        painter.text(
            egui::pos2(left, top + 48.0),
            egui::Align2::LEFT_TOP,
            metric.caption,
            egui::FontId::proportional(11.0),
            GOLD,
        );
    }

    let chart = egui::Rect::from_min_max(egui::pos2(inner.left(), inner.top() + 90.0), inner.max);
    let bars = content::DASHBOARD_BARS.len() as f32;
    let slot = chart.width() / bars;
    for (i, height) in content::DASHBOARD_BARS.iter().enumerate() {
        let full = chart.height() * f32::from(*height) / 100.0;
        let bar_height = full * bar_scale(time, i);
        let left = chart.left() + i as f32 * slot + slot * 0.15;
        let bar = egui::Rect::from_min_max(
            egui::pos2(left, chart.bottom() - bar_height),
            egui::pos2(left + slot * 0.7, chart.bottom()),
        );
        let color = if i + 1 == content::DASHBOARD_BARS.len() {
            GOLD
        } else {
            lighten_color(SURFACE, 0.15 + 0.03 * i as f32)
        };
        painter.rect_filled(bar, egui::CornerRadius::same(2), color);
    }
}

pub fn marquee(ui: &mut egui::Ui, time: f64) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 56.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::CornerRadius::ZERO, SURFACE);

    let font = egui::FontId::proportional(22.0);
    let gap = 64.0;
    let galleys: Vec<_> = content::INDUSTRIES
        .iter()
        .map(|name| painter.layout_no_wrap(name.to_uppercase(), font.clone(), MUTED))
        .collect();
    let copy_width: f32 = galleys.iter().map(|g| g.size().x + gap).sum();
    if copy_width <= 0.0 {
        return;
    }

    let mut x = rect.left() + marquee_offset(time, copy_width);
    while x < rect.right() {
        for galley in &galleys {
            let y = rect.center().y - galley.size().y / 2.0;
            let advance = galley.size().x + gap;
            painter.galley(egui::pos2(x, y), galley.clone(), MUTED);
            x += advance;
        }
    }
}

pub fn tech_tags(ui: &mut egui::Ui, tags: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            egui::Frame::new()
                .stroke(egui::Stroke::new(1.0, BORDER))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(*tag).small().color(MUTED));
                });
        }
    });
}

/// Portfolio slider. Arrows and indicators show while hovered; a click on a
/// control is reported as input, a click elsewhere on the frame as a frame
/// click.
pub fn carousel(
    ui: &mut egui::Ui,
    work: &WorkState,
    textures: &mut TextureCache,
) -> CarouselInteraction {
    let width = ui.available_width();
    let (rect, frame) = ui.allocate_exact_size(
        egui::vec2(width, width * 9.0 / 16.0),
        egui::Sense::click(),
    );
    let mut interaction = CarouselInteraction {
        input: None,
        frame_clicked: frame.clicked(),
    };

    let key = *work.carousel.current();
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(12), SURFACE);
    match textures.get(ui.ctx(), key) {
        Some(texture) => {
            egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), rect.size()))
                .corner_radius(egui::CornerRadius::same(12))
                .paint_at(ui, rect);
        }
        None => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                key.alt_text(),
                egui::FontId::proportional(18.0),
                MUTED,
            );
        }
    }
    let _ = frame.on_hover_text(key.alt_text());

    let hovered = ui.rect_contains_pointer(rect);
    if !hovered {
        return interaction;
    }

    let arrow = egui::vec2(40.0, 40.0);
    let previous = egui::Rect::from_center_size(
        egui::pos2(rect.left() + 32.0, rect.center().y),
        arrow,
    );
    let next = egui::Rect::from_center_size(
        egui::pos2(rect.right() - 32.0, rect.center().y),
        arrow,
    );
    if ui.put(previous, control_button("‹")).clicked() {
        interaction.input = Some(CarouselInput::Previous);
    }
    if ui.put(next, control_button("›")).clicked() {
        interaction.input = Some(CarouselInput::Next);
    }

    let dot = 10.0;
    let spacing = 8.0;
    let count = work.carousel.len() as f32;
    let total = count * dot + (count - 1.0) * spacing;
    let mut x = rect.center().x - total / 2.0;
    let y = rect.bottom() - 20.0;
    for indicator in work.carousel.indicators() {
        let dot_rect = egui::Rect::from_min_size(egui::pos2(x, y - dot / 2.0), egui::vec2(dot, dot));
        let response = ui.interact(
            dot_rect,
            ui.id().with(("carousel_indicator", indicator.position)),
            egui::Sense::click(),
        );
        let color = if indicator.active {
            GOLD
        } else {
            egui::Color32::from_white_alpha(120)
        };
        ui.painter().circle_filled(dot_rect.center(), dot / 2.0, color);
        if response.clicked() {
            interaction.input = Some(CarouselInput::Select(indicator.position));
        }
        x += dot + spacing;
    }

    interaction
}

fn control_button(glyph: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(glyph.to_owned()).size(24.0).color(TEXT))
        .fill(egui::Color32::from_black_alpha(160))
        .stroke(egui::Stroke::NONE)
        .corner_radius(egui::CornerRadius::same(20))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn bars_pulse_between_half_and_full_height() {
        assert!(close(bar_scale(0.0, 0), 0.5));
        assert!(close(bar_scale(1.5, 0), 1.0));
        assert!(close(bar_scale(3.0, 0), 0.5));
        for step in 0..300 {
            let scale = bar_scale(step as f64 * 0.01, 3);
            assert!((0.5..=1.0).contains(&scale));
        }
    }

    #[test]
    fn bars_are_staggered_by_a_tenth_of_a_second() {
        assert!(close(bar_scale(0.1, 1), 0.5));
        assert!(close(bar_scale(1.6, 1), 1.0));
    }

    #[test]
    fn marquee_loops_every_twenty_seconds() {
        assert!(close(marquee_offset(0.0, 400.0), 0.0));
        assert!(close(marquee_offset(10.0, 400.0), -200.0));
        assert!(close(marquee_offset(20.0, 400.0), 0.0));
        assert!(close(marquee_offset(25.0, 400.0), -100.0));
    }
}
