//! The five views rendered inside the scroll area.

use eframe::egui;
use shared::domain::Route;
use site_core::content;

use crate::controller::reducer::{CarouselInteraction, HomeState, UiAction, ViewState, WorkState};
use crate::media::TextureCache;
use crate::ui::theme::{self, GOLD, MUTED};
use crate::ui::widgets;

pub fn render(
    ui: &mut egui::Ui,
    view: &ViewState,
    time: f64,
    textures: &mut TextureCache,
    actions: &mut Vec<UiAction>,
) {
    match view {
        ViewState::Home(home) => home_page(ui, home, time, actions),
        ViewState::Services => services_page(ui),
        ViewState::Work(work) => work_page(ui, work, textures, actions),
        ViewState::About => about_page(ui),
        ViewState::NotFound { path } => not_found_page(ui, path, actions),
    }
}

fn home_page(ui: &mut egui::Ui, home: &HomeState, time: f64, actions: &mut Vec<UiAction>) {
    let (dx, dy) = home.pointer.offset();
    let shift = egui::vec2(dx, dy);
    let narrow = theme::is_narrow(ui.available_width());

    ui.add_space(48.0);
    let hero_text = |ui: &mut egui::Ui, actions: &mut Vec<UiAction>| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), 0.0), egui::Sense::hover());
        let builder = egui::UiBuilder::new().max_rect(egui::Rect::from_min_size(
            rect.min - shift,
            egui::vec2(rect.width(), f32::INFINITY),
        ));
        ui.scope_builder(builder, |ui| {
            ui.label(egui::RichText::new("LOGIC MEETS").size(56.0).strong());
            ui.label(
                egui::RichText::new("Luxury.")
                    .size(56.0)
                    .italics()
                    .color(GOLD),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(
                    "Bespoke ERP, billing and automation software engineered around the way \
                     your business actually runs.",
                )
                .size(17.0)
                .color(MUTED),
            );
            ui.add_space(20.0);
            ui.horizontal(|ui| {
                if ui.add(widgets::gold_button("ENQUIRE NOW")).clicked() {
                    actions.push(UiAction::ScrollToContact);
                }
                if ui.add(widgets::outline_button("VIEW WORK")).clicked() {
                    actions.push(UiAction::GoTo(Route::Work));
                }
            });
        });
    };

    if narrow {
        hero_text(ui, actions);
        ui.add_space(32.0);
        widgets::dashboard_mockup(ui, time, shift);
    } else {
        ui.columns(2, |columns| {
            hero_text(&mut columns[0], actions);
            widgets::dashboard_mockup(&mut columns[1], time, shift);
        });
    }

    ui.add_space(64.0);
    widgets::marquee(ui, time);
    ui.add_space(64.0);

    widgets::section_heading(ui, "CAPABILITIES", "Systems that run the business");
    let [lead, rest @ ..] = &content::CAPABILITIES;
    let mut card = |ui: &mut egui::Ui, capability: &content::Capability, large: bool| {
        if widgets::offering_card(
            ui,
            &capability.offering,
            Some(capability.call_to_action),
            large,
        ) {
            actions.push(UiAction::GoTo(capability.target));
        }
    };
    if narrow {
        card(ui, lead, true);
        for capability in rest {
            card(ui, capability, false);
        }
    } else {
        ui.columns(2, |columns| {
            card(&mut columns[0], lead, true);
            for capability in rest {
                card(&mut columns[1], capability, false);
            }
        });
    }
}

fn services_page(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    widgets::section_heading(ui, "SERVICES", "What we build");
    let per_row = if theme::is_narrow(ui.available_width()) { 1 } else { 3 };
    for row in content::SERVICES.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, offering) in columns.iter_mut().zip(row) {
                widgets::offering_card(column, offering, None, false);
            }
        });
        ui.add_space(8.0);
    }
}

fn work_page(
    ui: &mut egui::Ui,
    work: &WorkState,
    textures: &mut TextureCache,
    actions: &mut Vec<UiAction>,
) {
    let project = &content::FEATURED_PROJECT;
    ui.add_space(48.0);
    widgets::section_heading(ui, "OUR WORK", "Selected projects");

    let details = |ui: &mut egui::Ui| {
        ui.label(egui::RichText::new(project.kicker).small().strong().color(GOLD));
        ui.label(egui::RichText::new(project.title).size(28.0).strong());
        ui.label(egui::RichText::new(project.summary).color(MUTED));
        ui.add_space(8.0);
        widgets::tech_tags(ui, project.stack);
    };
    let mut slider = |ui: &mut egui::Ui| {
        let interaction = widgets::carousel(ui, work, textures);
        if interaction != CarouselInteraction::default() {
            actions.push(UiAction::Carousel(interaction));
        }
    };

    if theme::is_narrow(ui.available_width()) {
        slider(ui);
        ui.add_space(16.0);
        details(ui);
    } else {
        ui.columns(2, |columns| {
            slider(&mut columns[0]);
            details(&mut columns[1]);
        });
    }
}

fn about_page(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    widgets::section_heading(ui, "ABOUT US", content::ABOUT_LEAD);
    for paragraph in content::ABOUT_PARAGRAPHS {
        ui.label(egui::RichText::new(paragraph).color(MUTED));
        ui.add_space(8.0);
    }
    ui.add_space(24.0);
    let stats = content::ABOUT_STATS;
    ui.columns(stats.len(), |columns| {
        for (column, stat) in columns.iter_mut().zip(stats.iter()) {
            widgets::card_frame().show(column, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(stat.value).size(36.0).strong().color(GOLD));
                ui.label(egui::RichText::new(stat.label).small().color(MUTED));
            });
        }
    });
}

fn not_found_page(ui: &mut egui::Ui, path: &str, actions: &mut Vec<UiAction>) {
    ui.add_space(96.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("404").size(72.0).strong().color(GOLD));
        ui.label(format!("Nothing lives at {path}."));
        ui.add_space(16.0);
        if ui.add(widgets::outline_button("BACK TO HOME")).clicked() {
            actions.push(UiAction::GoTo(Route::Home));
        }
    });
}
