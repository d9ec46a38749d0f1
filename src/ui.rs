use ggegui::egui;
use ggez::graphics::{Canvas, DrawParam};
use std::sync::mpsc::Sender;

use fortune_wheel_engine::WheelConfig;

use crate::presets::Preset;
use crate::state::WheelState;

pub const MIN_SEGMENTS: usize = 2;
pub const MAX_SEGMENTS: usize = 12;

pub enum UIMessage {
    Spin,
    ApplyCount(usize),
    UpdateLabels(Vec<String>),
    ApplyPreset(Preset),
    LoadWheel { path: String },
}

pub struct UiState {
    ctx: ggegui::Gui,
    sender: Sender<UIMessage>,
    segment_count: usize,
    labels: Vec<String>,
    wheel_path: String,
}

impl UiState {
    pub fn new(ctx: &mut ggez::Context, tx: Sender<UIMessage>, config: &WheelConfig) -> Self {
        Self {
            ctx: ggegui::Gui::new(ctx),
            sender: tx,
            segment_count: config.segment_count(),
            labels: config.labels.clone(),
            wheel_path: "default_wheel.json".to_string(),
        }
    }

    /// Resyncs the editor drafts after the config changed outside the editor
    /// (preset applied, wheel file loaded, count applied).
    pub fn refresh(&mut self, config: &WheelConfig) {
        self.segment_count = config.segment_count();
        self.labels = config.labels.clone();
    }

    pub fn render(&mut self, ctx: &mut ggez::Context) {
        let mut canvas = Canvas::from_frame(ctx, None);
        canvas.draw(&self.ctx, DrawParam::default().dest(ggez::glam::Vec2::ZERO));
        canvas.finish(ctx).unwrap();
    }

    pub fn update(&mut self, state: &WheelState, spinning: bool, ctx: &mut ggez::Context) {
        let egui_ctx = self.ctx.ctx();
        let can_edit = !spinning;

        egui::Window::new("Wheel")
            .default_width(300.0)
            .show(&egui_ctx, |ui| {
                ui.heading(state.config.name.clone());
                ui.separator();

                ui.add_enabled_ui(!spinning, |ui| {
                    if ui.button("Spin!").clicked() {
                        self.sender.send(UIMessage::Spin).unwrap();
                    }
                });
                if spinning {
                    ui.label("Spinning...");
                } else if let Some(result) = &state.result {
                    ui.label(format!("Winner: {result}"));
                }

                ui.add_space(8.0);
                ui.separator();
                ui.heading("Segments");

                ui.add_enabled_ui(can_edit, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Count:");
                        ui.add(
                            egui::DragValue::new(&mut self.segment_count)
                                .clamp_range(MIN_SEGMENTS..=MAX_SEGMENTS),
                        );
                        if ui.button("Apply").clicked() {
                            self.sender
                                .send(UIMessage::ApplyCount(self.segment_count))
                                .unwrap();
                        }
                    });

                    for (i, label) in self.labels.iter_mut().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(format!("{}.", i + 1));
                            ui.text_edit_singleline(label);
                        });
                    }

                    if ui.button("Update wheel").clicked() {
                        self.sender
                            .send(UIMessage::UpdateLabels(self.labels.clone()))
                            .unwrap();
                    }

                    ui.add_space(8.0);
                    ui.separator();
                    ui.heading("Presets");

                    ui.horizontal(|ui| {
                        for preset in [Preset::Lunch, Preset::YesNo, Preset::Numbers] {
                            if ui.button(preset.label()).clicked() {
                                self.sender.send(UIMessage::ApplyPreset(preset)).unwrap();
                            }
                        }
                    });

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label("Wheel:");
                        ui.text_edit_singleline(&mut self.wheel_path);
                        if ui.button("Load").clicked() {
                            self.sender
                                .send(UIMessage::LoadWheel {
                                    path: self.wheel_path.clone(),
                                })
                                .unwrap();
                        }
                    });
                });
            });

        self.ctx.update(ctx);
    }

    pub(crate) fn text_input_event(&mut self, ctx: &mut ggez::Context, character: char) {
        self.ctx.input.text_input_event(character);
    }
}
