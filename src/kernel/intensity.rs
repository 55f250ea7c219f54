use serde::{Deserialize, Deserializer, Serialize};

/// Global mood strength, always within [`Intensity::MIN`, `Intensity::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Intensity(u8);

pub const PRESETS: [u8; 5] = [1, 3, 5, 7, 9];

const LABELS: [&str; 5] = ["Very Mild", "Mild", "Moderate", "Strong", "Very Strong"];

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Intensity = Intensity(5);

    /// Clamps any integer into range. The slider is expected to stay in
    /// range already; anything else is pulled to the nearest bound.
    pub fn clamped(level: i64) -> Self {
        Intensity(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Exact constructor, `None` when out of range.
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Intensity(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        LABELS[usize::from((self.0 - 1) / 2)]
    }

    pub fn guidance(&self) -> &'static str {
        match self.0 {
            0..=3 => "Your mood is gentle and manageable. Consider light, uplifting foods.",
            4..=6 => "Your mood is moderate. Balanced, comforting foods might help.",
            7..=8 => "Your mood is strong. Nourishing, grounding foods could be beneficial.",
            _ => "Your mood is very intense. Consider calming, soothing foods and maybe some self-care.",
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Data files may carry any number; keep the range invariant on the way in.
impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(Intensity::clamped(raw))
    }
}
