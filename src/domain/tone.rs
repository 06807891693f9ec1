use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// The overall register the drafted email should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Tone {
    #[default]
    Formal,
    Polite,
    Direct,
    Concise,
    Empathetic,
}

impl Tone {
    /// All tones in menu order. The first is the default.
    pub const ALL: [Tone; 5] =
        [Tone::Formal, Tone::Polite, Tone::Direct, Tone::Concise, Tone::Empathetic];

    /// Name as it appears in the instruction text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Polite => "Polite",
            Tone::Direct => "Direct",
            Tone::Concise => "Concise",
            Tone::Empathetic => "Empathetic",
        }
    }

    /// Short hint shown next to the tone in menus.
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Formal => "Professional register for faculty and administration",
            Tone::Polite => "Courteous and warm without being stiff",
            Tone::Direct => "States the ask up front",
            Tone::Concise => "As few sentences as the request allows",
            Tone::Empathetic => "Acknowledges the recipient's situation",
        }
    }

    /// Parse a tone name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Tone> {
        match name.trim().to_lowercase().as_str() {
            "formal" => Some(Tone::Formal),
            "polite" => Some(Tone::Polite),
            "direct" => Some(Tone::Direct),
            "concise" => Some(Tone::Concise),
            "empathetic" => Some(Tone::Empathetic),
            _ => None,
        }
    }
}

impl FromStr for Tone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::from_name(s).ok_or_else(|| AppError::InvalidTone { name: s.to_string() })
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
