use std::sync::mpsc::{Receiver, channel};
use std::time::Instant;

use ggez::event::{self, EventHandler};
use ggez::input::keyboard::KeyInput;
use ggez::{Context, ContextBuilder, GameError, GameResult};

pub mod cues;
pub mod input;
pub mod presets;
pub mod rendering;
pub mod state;
pub mod ui;

use fortune_wheel_engine::{
    POINTER_ANGLE, RngSource, SpinEngine, SpinParams, TICK_INTERVAL, TickScheduler, WheelConfig,
    WheelError, resolve,
};

use cues::CueState;
use input::{InputState, WheelAction};
use presets::{Preset, preset_config};
use rendering::Renderer;
use state::WheelState;
use ui::{MAX_SEGMENTS, MIN_SEGMENTS, UIMessage, UiState};

struct MainState {
    state: WheelState,
    engine: SpinEngine,
    ticker: TickScheduler,
    input: InputState,
    ui: UiState,
    ui_rx: Receiver<UIMessage>,
    renderer: Renderer,
    cues: CueState,
    tick_accumulator: f32,
}

impl MainState {
    fn new(ctx: &mut Context) -> GameResult<Self> {
        let config = load_wheel("default_wheel.json").unwrap_or_else(|e| {
            log::warn!("falling back to built-in wheel: {e}");
            WheelConfig::default()
        });

        let (tx, rx) = channel();
        let ui = UiState::new(ctx, tx, &config);

        Ok(Self {
            state: WheelState::new(config),
            engine: SpinEngine::new(SpinParams::default()),
            ticker: TickScheduler::new(),
            input: InputState::default(),
            ui,
            ui_rx: rx,
            renderer: Renderer::new(),
            cues: CueState::default(),
            tick_accumulator: 0.0,
        })
    }

    fn request_spin(&mut self) {
        match self
            .engine
            .request_spin(Instant::now(), &mut RngSource(rand::rng()))
        {
            Ok(session) => {
                self.state.result = None;
                self.ticker.reset();
                self.tick_accumulator = 0.0;
                log::info!(
                    "spin started: target {:.3} rad over {:?}",
                    session.target_rotation,
                    session.duration
                );
            }
            Err(WheelError::AlreadySpinning) => {
                // the UI disables its trigger while spinning; keys can still race
                log::warn!("spin requested while spinning, ignored");
            }
            Err(e) => {
                self.state.announce(format!("Cannot spin: {e}"));
                log::error!("spin request failed: {e}");
            }
        }
    }

    fn apply_config(&mut self, config: WheelConfig, note: &str) {
        if self.engine.is_spinning() {
            self.state.announce("Wait for the spin to finish");
            return;
        }
        self.state.set_config(config);
        self.ui.refresh(&self.state.config);
        self.state.announce(note);
    }

    fn apply_preset(&mut self, preset: Preset) {
        self.apply_config(preset_config(preset), "Preset applied!");
    }

    fn handle_ui_message(&mut self, msg: UIMessage) {
        match msg {
            UIMessage::Spin => self.request_spin(),
            UIMessage::ApplyCount(count) => {
                let mut config = self.state.config.clone();
                config.set_segment_count(count.clamp(MIN_SEGMENTS, MAX_SEGMENTS));
                self.apply_config(config, "Segment count applied!");
            }
            UIMessage::UpdateLabels(labels) => {
                let labels = labels
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| {
                        if label.trim().is_empty() {
                            format!("Option {}", i + 1)
                        } else {
                            label
                        }
                    })
                    .collect();
                match WheelConfig::new(self.state.config.name.clone(), labels) {
                    Ok(config) => self.apply_config(config, "Wheel updated!"),
                    Err(e) => self.state.announce(format!("Cannot update wheel: {e}")),
                }
            }
            UIMessage::ApplyPreset(preset) => self.apply_preset(preset),
            UIMessage::LoadWheel { path } => match load_wheel(&path) {
                Ok(config) => self.apply_config(config, "Wheel loaded!"),
                Err(e) => {
                    self.state.announce("Could not load wheel file");
                    log::error!("loading {path}: {e:?}");
                }
            },
        }
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta().as_secs_f32();
        self.state.update(dt);
        self.cues.update(dt);

        if let Some(actions) = self.input.consume_actions() {
            for action in actions {
                match action {
                    WheelAction::Spin => self.request_spin(),
                    WheelAction::ApplyPreset(preset) => self.apply_preset(preset),
                }
            }
        }

        while let Ok(msg) = self.ui_rx.try_recv() {
            self.handle_ui_message(msg);
        }

        let frame = self.engine.advance(Instant::now());

        // Boundary-cross sampling at a fixed cadence while spinning
        if self.engine.is_spinning() {
            self.tick_accumulator += dt;
            let interval = TICK_INTERVAL.as_secs_f32();
            while self.tick_accumulator >= interval {
                self.tick_accumulator -= interval;
                let sample = self
                    .ticker
                    .sample(frame.rotation, &self.state.config, POINTER_ANGLE)
                    .map_err(|e| GameError::CustomError(e.to_string()))?;
                if sample.crossed {
                    self.cues.tick();
                    log::trace!("tick: segment {}", sample.segment);
                }
            }
        }

        if frame.done {
            let outcome = resolve(frame.rotation, &self.state.config, POINTER_ANGLE)
                .map_err(|e| GameError::CustomError(e.to_string()))?;
            let winner = self
                .state
                .config
                .label(outcome.index)
                .unwrap_or_default()
                .to_string();
            log::info!("winner: {winner} (segment {})", outcome.index);
            self.state.result = Some(winner);
            self.cues.fanfare();
        }

        self.ui
            .update(&self.state, self.engine.is_spinning(), ctx);

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.renderer
            .draw(ctx, &self.state, self.engine.rotation(), &self.cues)?;
        self.ui.render(ctx);
        Ok(())
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        input: KeyInput,
        _repeat: bool,
    ) -> Result<(), GameError> {
        if let Some(keycode) = input.keycode {
            self.input.process_key_down(keycode);
        }
        Ok(())
    }

    fn text_input_event(&mut self, ctx: &mut Context, character: char) -> Result<(), GameError> {
        self.ui.text_input_event(ctx, character);
        Ok(())
    }
}

fn load_wheel(path: &str) -> anyhow::Result<WheelConfig> {
    let data = std::fs::read_to_string(path)?;
    let config: WheelConfig = serde_json::from_str(&data)?;
    if config.is_empty() {
        anyhow::bail!("wheel file {path} has no segments");
    }
    Ok(config)
}

pub fn main() -> GameResult {
    env_logger::builder()
        .filter(None, log::LevelFilter::Info)
        .init();

    let (mut ctx, event_loop) = ContextBuilder::new("fortune_wheel", "you")
        .window_setup(ggez::conf::WindowSetup::default().title("Wheel of Fortune"))
        .window_mode(ggez::conf::WindowMode::default().dimensions(800.0, 600.0))
        .build()?;

    let state = MainState::new(&mut ctx)?;
    event::run(ctx, event_loop, state)
}
