use fortune_wheel_engine::WheelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Lunch,
    YesNo,
    Numbers,
}

impl Preset {
    pub fn label(self) -> &'static str {
        match self {
            Self::Lunch => "Lunch",
            Self::YesNo => "Yes / No",
            Self::Numbers => "Numbers",
        }
    }
}

pub fn preset_config(preset: Preset) -> WheelConfig {
    let (name, labels): (&str, Vec<String>) = match preset {
        Preset::Lunch => (
            "Lunch",
            [
                "Chicken",
                "Pizza",
                "Jajangmyeon",
                "Tteokbokki",
                "Gimbap",
                "Burger",
                "Sushi",
                "Samgyeopsal",
            ]
            .map(String::from)
            .to_vec(),
        ),
        Preset::YesNo => ("Yes / No", ["Yes!", "No"].map(String::from).to_vec()),
        Preset::Numbers => (
            "Numbers",
            (1..=8).map(|i| i.to_string()).collect(),
        ),
    };

    // preset label lists are never empty
    WheelConfig::new(name, labels).expect("preset wheel")
}
