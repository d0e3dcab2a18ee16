//! Mood enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of moods an entry can be tagged with.
///
/// Declaration order is the enumeration order: it drives `rank()` (used by the
/// timeline) and the tie-break of the most frequent mood. The persisted form is
/// the Portuguese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    Feliz,
    Triste,
    Ansioso,
    Relaxado,
    Irritado,
    #[serde(rename = "Energético")]
    Energetico,
    Cansado,
    Inspirado,
}

impl Mood {
    /// All moods in enumeration order
    pub const ALL: [Mood; 8] = [
        Mood::Feliz,
        Mood::Triste,
        Mood::Ansioso,
        Mood::Relaxado,
        Mood::Irritado,
        Mood::Energetico,
        Mood::Cansado,
        Mood::Inspirado,
    ];

    /// The persisted label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Feliz => "Feliz",
            Mood::Triste => "Triste",
            Mood::Ansioso => "Ansioso",
            Mood::Relaxado => "Relaxado",
            Mood::Irritado => "Irritado",
            Mood::Energetico => "Energético",
            Mood::Cansado => "Cansado",
            Mood::Inspirado => "Inspirado",
        }
    }

    /// English name, accepted as input alongside the label
    pub fn english_name(&self) -> &'static str {
        match self {
            Mood::Feliz => "happy",
            Mood::Triste => "sad",
            Mood::Ansioso => "anxious",
            Mood::Relaxado => "relaxed",
            Mood::Irritado => "irritated",
            Mood::Energetico => "energetic",
            Mood::Cansado => "tired",
            Mood::Inspirado => "inspired",
        }
    }

    /// Fixed position in the enumeration (0-based)
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted.is_empty() {
            return Err("Mood must not be empty".to_string());
        }

        Mood::ALL
            .into_iter()
            .find(|mood| {
                let label = mood.label().to_lowercase();
                wanted == label
                    || wanted == label.replace('é', "e")
                    || wanted == mood.english_name()
            })
            .ok_or_else(|| format!("Invalid mood: '{}'", s))
    }
}
