use ggez::input::keyboard::KeyCode;

use crate::presets::Preset;

#[derive(Debug, Clone)]
pub enum WheelAction {
    Spin,
    ApplyPreset(Preset),
}

#[derive(Default)]
pub struct InputState {
    pending: Vec<WheelAction>,
}

impl InputState {
    pub fn consume_actions(&mut self) -> Option<Vec<WheelAction>> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }

    pub fn process_key_down(&mut self, key: KeyCode) {
        match key {
            KeyCode::Space => self.pending.push(WheelAction::Spin),
            KeyCode::Key1 => self.pending.push(WheelAction::ApplyPreset(Preset::Lunch)),
            KeyCode::Key2 => self.pending.push(WheelAction::ApplyPreset(Preset::YesNo)),
            KeyCode::Key3 => self.pending.push(WheelAction::ApplyPreset(Preset::Numbers)),
            _ => {}
        }
    }
}
