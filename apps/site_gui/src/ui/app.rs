use std::time::Duration;

use chrono::Datelike;
use crossbeam_channel::Receiver;
use eframe::egui;
use shared::domain::SubmissionStatus;

use crate::controller::events::UiEvent;
use crate::controller::reducer::{Effect, SiteState, UiAction, ViewState};
use crate::media::TextureCache;
use crate::ui::{layout, pages, theme};

pub struct SiteApp {
    state: SiteState,
    ui_rx: Receiver<UiEvent>,
    textures: TextureCache,
    year: i32,
    last_pointer: Option<egui::Pos2>,
}

impl SiteApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: SiteState, ui_rx: Receiver<UiEvent>) -> Self {
        theme::apply(&cc.egui_ctx);
        Self {
            state,
            ui_rx,
            textures: TextureCache::default(),
            year: chrono::Local::now().year(),
            last_pointer: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.handle_event(event);
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<UiAction>) {
        for action in actions {
            if let Some(Effect::OpenUrl(url)) = self.state.apply(action) {
                let open = if url.starts_with("mailto:") {
                    egui::OpenUrl::same_tab(url)
                } else {
                    egui::OpenUrl::new_tab(url)
                };
                ctx.open_url(open);
            }
        }
    }

    fn show_scroll_content(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let time = ctx.input(|i| i.time);
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.state.viewport.resize(rect.width(), rect.height());

                if matches!(self.state.view, ViewState::Home(_)) {
                    let pointer = ui.input(|i| i.pointer.hover_pos());
                    if pointer != self.last_pointer {
                        self.last_pointer = pointer;
                        if let Some(pos) = pointer {
                            let local = pos - rect.min;
                            actions.push(UiAction::PointerMoved {
                                x: local.x,
                                y: local.y,
                            });
                        }
                    }
                }

                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("site_scroll")
                    .auto_shrink([false, false]);
                if let Some(offset) = self.state.viewport.take_request() {
                    scroll = scroll.vertical_scroll_offset(offset);
                }

                let output = scroll.show(ui, |ui| {
                    let full = ui.available_rect_before_wrap();
                    let width = (full.width() - 48.0).clamp(0.0, theme::CONTENT_MAX_WIDTH);
                    let column = egui::Rect::from_min_size(
                        egui::pos2(full.center().x - width / 2.0, full.top()),
                        egui::vec2(width, f32::INFINITY),
                    );
                    ui.scope_builder(egui::UiBuilder::new().max_rect(column), |ui| {
                        pages::render(ui, &self.state.view, time, &mut self.textures, actions);
                    });
                    layout::footer(ui, &mut self.state, &mut self.textures, self.year, actions);
                });

                self.state.viewport.observe(
                    output.state.offset.y,
                    output.content_size.y,
                    output.inner_rect.height(),
                );
            });
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        layout::header(ctx, &self.state, &mut self.textures, &mut actions);
        layout::mobile_menu(ctx, &self.state, &mut actions);
        layout::status_banner(ctx, &self.state);
        self.show_scroll_content(ctx, &mut actions);
        layout::notice_modal(ctx, &self.state, &mut actions);
        layout::preview_modal(ctx, &self.state, &mut self.textures, &mut actions);
        self.apply_actions(ctx, actions);

        let animating = matches!(self.state.view, ViewState::Home(_))
            || self.state.form.status() == SubmissionStatus::Submitting;
        if animating {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl Drop for SiteApp {
    fn drop(&mut self) {
        self.state.teardown();
    }
}
