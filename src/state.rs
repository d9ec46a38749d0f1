use fortune_wheel_engine::WheelConfig;

const MESSAGE_SECS: f32 = 2.0;

/// Client-side wheel state: the configuration being rendered plus the
/// presentation bits (last winner, transient status message).
pub struct WheelState {
    pub config: WheelConfig,
    pub result: Option<String>,
    message: Option<(String, f32)>,
}

impl WheelState {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            result: None,
            message: None,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some((_, remaining)) = &mut self.message {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.message = None;
            }
        }
    }

    /// Shows a status line for a couple of seconds.
    pub fn announce(&mut self, text: impl Into<String>) {
        self.message = Some((text.into(), MESSAGE_SECS));
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn set_config(&mut self, config: WheelConfig) {
        self.config = config;
        self.result = None;
    }
}
