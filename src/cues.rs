const TICK_FLASH_SECS: f32 = 0.08;
const FANFARE_SECS: f32 = 1.5;

/// Visual cue playback: boundary crossings flash the pointer, a finished
/// spin pulses the result banner. Stands in for the original tick/fanfare
/// sounds without doing any audio I/O.
#[derive(Default)]
pub struct CueState {
    tick_flash: f32,
    fanfare: f32,
}

impl CueState {
    pub fn update(&mut self, dt: f32) {
        self.tick_flash = (self.tick_flash - dt).max(0.0);
        self.fanfare = (self.fanfare - dt).max(0.0);
    }

    pub fn tick(&mut self) {
        self.tick_flash = TICK_FLASH_SECS;
    }

    pub fn fanfare(&mut self) {
        self.fanfare = FANFARE_SECS;
    }

    pub fn pointer_flash(&self) -> bool {
        self.tick_flash > 0.0
    }

    /// Remaining fanfare intensity in [0, 1], used to scale the banner.
    pub fn fanfare_strength(&self) -> f32 {
        self.fanfare / FANFARE_SECS
    }
}
