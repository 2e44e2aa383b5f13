//! Page chrome: header with navigation, mobile menu, status banner, the
//! footer call-to-action with the lead form, and the blocking notice.

use eframe::egui;
use shared::domain::{Route, SubmissionStatus};
use site_core::{content, LeadForm, Navigator};

use crate::controller::reducer::{CarouselInteraction, SiteState, UiAction, ViewState};
use crate::media::{AssetKey, TextureCache};
use crate::ui::theme::{self, BORDER, GOLD, MUTED, SURFACE, TEXT};
use crate::ui::widgets;

pub const SUBMIT_IDLE_LABEL: &str = "BOOK DISCOVERY CALL →";
pub const SUBMIT_SUCCESS_LABEL: &str = "REQUEST RECEIVED ✓";

/// Label of the submit control for the given state. Submitting shows a
/// spinner instead of text.
pub fn submit_label(status: SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::Idle => Some(SUBMIT_IDLE_LABEL),
        SubmissionStatus::Submitting => None,
        SubmissionStatus::Success => Some(SUBMIT_SUCCESS_LABEL),
    }
}

fn logo(ui: &mut egui::Ui, textures: &mut TextureCache, height: f32) -> egui::Response {
    let response = match textures.get(ui.ctx(), AssetKey::Logo) {
        Some(texture) => {
            let size = texture.size_vec2();
            let scale = height / size.y.max(1.0);
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::new(
                    texture.id(),
                    size * scale,
                ))
                .sense(egui::Sense::click()),
            )
        }
        None => ui.add(
            egui::Label::new(
                egui::RichText::new(content::BRAND)
                    .size(22.0)
                    .strong()
                    .color(GOLD),
            )
            .sense(egui::Sense::click()),
        ),
    };
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

fn nav_links(ui: &mut egui::Ui, navigator: &Navigator, actions: &mut Vec<UiAction>) {
    for route in content::NAV_LINKS {
        let active = navigator.is_active(route);
        if ui
            .add(widgets::link_button(route.label(), active))
            .clicked()
        {
            actions.push(UiAction::GoTo(route));
        }
    }
}

pub fn header(
    ctx: &egui::Context,
    state: &SiteState,
    textures: &mut TextureCache,
    actions: &mut Vec<UiAction>,
) {
    egui::TopBottomPanel::top("site_header")
        .exact_height(theme::HEADER_HEIGHT)
        .frame(
            egui::Frame::new()
                .fill(theme::BACKGROUND.gamma_multiply(0.95))
                .stroke(egui::Stroke::new(1.0, BORDER))
                .inner_margin(egui::Margin::symmetric(24, 12)),
        )
        .show(ctx, |ui| {
            let narrow = theme::is_narrow(ui.available_width());
            ui.horizontal_centered(|ui| {
                if logo(ui, textures, 40.0).clicked() {
                    actions.push(UiAction::GoTo(Route::Home));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if narrow {
                        let glyph = if state.menu_open { "✕" } else { "☰" };
                        let toggle = egui::Button::new(egui::RichText::new(glyph).size(22.0))
                            .frame(false);
                        if ui.add(toggle).clicked() {
                            actions.push(UiAction::ToggleMenu);
                        }
                        return;
                    }
                    if ui.add(widgets::gold_button("Start Project")).clicked() {
                        actions.push(UiAction::ScrollToContact);
                    }
                    ui.add_space(16.0);
                    for route in content::NAV_LINKS.iter().rev() {
                        let active = state.navigator.is_active(*route);
                        if ui
                            .add(widgets::link_button(route.label(), active))
                            .clicked()
                        {
                            actions.push(UiAction::GoTo(*route));
                        }
                    }
                });
            });
        });
}

pub fn mobile_menu(ctx: &egui::Context, state: &SiteState, actions: &mut Vec<UiAction>) {
    if !state.menu_open {
        return;
    }
    egui::TopBottomPanel::top("mobile_menu")
        .frame(
            egui::Frame::new()
                .fill(SURFACE)
                .stroke(egui::Stroke::new(1.0, BORDER))
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            if theme::is_narrow(ui.available_width() + 48.0) {
                ui.vertical_centered(|ui| {
                    nav_links(ui, &state.navigator, actions);
                    ui.add_space(8.0);
                    if ui.add(widgets::gold_button("Start Project")).clicked() {
                        actions.push(UiAction::ScrollToContact);
                    }
                });
            } else {
                // Widened past the breakpoint while open.
                actions.push(UiAction::CloseMenu);
            }
        });
}

pub fn status_banner(ctx: &egui::Context, state: &SiteState) {
    let Some(banner) = state.status_banner.as_deref() else {
        return;
    };
    egui::TopBottomPanel::top("status_banner")
        .frame(
            egui::Frame::new()
                .fill(egui::Color32::from_rgb(60, 20, 20))
                .inner_margin(egui::Margin::symmetric(24, 6)),
        )
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(banner).color(TEXT).small());
        });
}

fn lead_form(
    ui: &mut egui::Ui,
    form: &mut LeadForm,
    hint: Option<&'static str>,
    actions: &mut Vec<UiAction>,
) {
    let status = form.status();
    let field_width = ui.available_width().min(360.0);

    match form.email_buffer() {
        Some(buffer) => {
            let field = ui.add_sized(
                [field_width, 40.0],
                egui::TextEdit::singleline(buffer).hint_text("Enter your email"),
            );
            if field.changed() {
                actions.push(UiAction::EmailEdited);
            }
            if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                actions.push(UiAction::SubmitLead);
            }
        }
        None => {
            let mut cleared = String::new();
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut cleared)
                    .hint_text("Enter your email")
                    .desired_width(field_width),
            );
        }
    }

    let button = match submit_label(status) {
        Some(label) => widgets::gold_button(label),
        None => widgets::gold_button(" "),
    }
    .min_size(egui::vec2(field_width, 44.0));
    let response = ui.add_enabled(form.submit_enabled(), button);
    if status == SubmissionStatus::Submitting {
        ui.put(
            response.rect,
            egui::Spinner::new().size(18.0).color(egui::Color32::BLACK),
        );
    }
    if response.clicked() {
        actions.push(UiAction::SubmitLead);
    }

    if let Some(hint) = hint {
        ui.label(egui::RichText::new(hint).small().color(GOLD));
    }
}

pub fn footer(
    ui: &mut egui::Ui,
    state: &mut SiteState,
    textures: &mut TextureCache,
    year: i32,
    actions: &mut Vec<UiAction>,
) {
    ui.add_space(48.0);
    egui::Frame::new()
        .fill(SURFACE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .inner_margin(egui::Margin::symmetric(24, 48))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Ready to upgrade?").size(40.0).strong());
                ui.label(
                    egui::RichText::new(
                        "Tell us where your operations hurt. We will map the logic.",
                    )
                    .color(MUTED),
                );
                ui.add_space(16.0);
                let hint = state.form_hint;
                lead_form(ui, &mut state.form, hint, actions);
                ui.add_space(40.0);
                ui.separator();
                ui.add_space(16.0);

                if logo(ui, textures, 32.0).clicked() {
                    actions.push(UiAction::ScrollToTop);
                }
                ui.horizontal(|ui| {
                    if ui.add(widgets::link_button("LinkedIn", false)).clicked() {
                        actions.push(UiAction::OpenExternal(content::LINKEDIN_URL));
                    }
                    if ui.add(widgets::link_button("Mail", false)).clicked() {
                        actions.push(UiAction::OpenExternal(content::CONTACT_MAILTO));
                    }
                });
                ui.label(
                    egui::RichText::new(content::copyright_line(year))
                        .small()
                        .color(MUTED),
                );
            });
        });
}

/// Blocking notice for a failed submission. Must be dismissed.
pub fn notice_modal(ctx: &egui::Context, state: &SiteState, actions: &mut Vec<UiAction>) {
    let Some(notice) = &state.notice else {
        return;
    };
    let modal = egui::Modal::new(egui::Id::new("form_notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(egui::RichText::new(notice.message).color(TEXT));
        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(widgets::gold_button("OK")).clicked()
        })
        .inner
    });
    if modal.inner || modal.should_close() {
        actions.push(UiAction::DismissNotice);
    }
}

/// Enlarged view of the current slide, closed by clicking anywhere.
pub fn preview_modal(
    ctx: &egui::Context,
    state: &SiteState,
    textures: &mut TextureCache,
    actions: &mut Vec<UiAction>,
) {
    let ViewState::Work(work) = &state.view else {
        return;
    };
    if !work.expanded {
        return;
    }
    let key = *work.carousel.current();
    let modal = egui::Modal::new(egui::Id::new("carousel_preview")).show(ctx, |ui| {
        let max = egui::vec2(960.0, 600.0);
        let clicked = match textures.get(ui.ctx(), key) {
            Some(texture) => {
                let size = texture.size_vec2();
                let scale = (max.x / size.x).min(max.y / size.y).min(2.0);
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::new(
                        texture.id(),
                        size * scale,
                    ))
                    .sense(egui::Sense::click()),
                )
                .clicked()
            }
            None => ui.label(key.alt_text()).clicked(),
        };
        ui.label(egui::RichText::new(key.alt_text()).small().color(MUTED));
        clicked
    });
    if modal.inner || modal.should_close() {
        actions.push(UiAction::Carousel(CarouselInteraction {
            input: None,
            frame_clicked: true,
        }));
    }
}
