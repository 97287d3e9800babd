//! Static effect tables for the card game.
//!
//! Both tables are ordered; every procedure walks them front to back.

use crate::slicer::ClipRange;

/// An effect fetched from the remote sound library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchEffect {
    /// Output file name inside the output directory.
    pub file_name: &'static str,
    /// Free-text search query.
    pub query: &'static str,
    /// Longest acceptable sound in seconds.
    pub max_duration: f64,
    /// Human-readable description.
    pub description: &'static str,
}

/// An effect cut from a single source recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipEffect {
    /// Effect key; the output file is `<key>.mp3`.
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Range used when the source is long enough.
    pub default_range: ClipRange,
}

impl ClipEffect {
    /// Output file name for this effect.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.key, crate::constants::OUTPUT_EXTENSION)
    }
}

/// Effects searched for by `fetch`.
pub const FETCH_EFFECTS: &[FetchEffect] = &[
    FetchEffect {
        file_name: "button_click.mp3",
        query: "button click ui interface",
        max_duration: 0.5,
        description: "button click",
    },
    FetchEffect {
        file_name: "card_deal.mp3",
        query: "card shuffle dealing",
        max_duration: 2.0,
        description: "card deal",
    },
    FetchEffect {
        file_name: "card_play.mp3",
        query: "card flip play",
        max_duration: 1.0,
        description: "card play",
    },
    FetchEffect {
        file_name: "bid.mp3",
        query: "beep notification alert",
        max_duration: 1.0,
        description: "bid",
    },
    FetchEffect {
        file_name: "pass.mp3",
        query: "beep skip pass",
        max_duration: 1.0,
        description: "pass",
    },
    FetchEffect {
        file_name: "win.mp3",
        query: "victory win success",
        max_duration: 3.0,
        description: "victory",
    },
    FetchEffect {
        file_name: "lose.mp3",
        query: "defeat lose failure",
        max_duration: 3.0,
        description: "defeat",
    },
    FetchEffect {
        file_name: "landlord.mp3",
        query: "special achievement unlock",
        max_duration: 2.0,
        description: "become landlord",
    },
    FetchEffect {
        file_name: "bgm.mp3",
        query: "background music ambient",
        max_duration: 30.0,
        description: "background music",
    },
];

/// Effects cut by `slice` and `pick`.
pub const CLIP_EFFECTS: &[ClipEffect] = &[
    ClipEffect {
        key: "button_click",
        description: "button click",
        default_range: ClipRange::new(0.0, 0.3),
    },
    ClipEffect {
        key: "card_deal",
        description: "card deal",
        default_range: ClipRange::new(0.3, 1.0),
    },
    ClipEffect {
        key: "card_play",
        description: "card play",
        default_range: ClipRange::new(1.0, 1.5),
    },
    ClipEffect {
        key: "bid",
        description: "bid",
        default_range: ClipRange::new(1.5, 2.0),
    },
    ClipEffect {
        key: "pass",
        description: "pass",
        default_range: ClipRange::new(2.0, 2.5),
    },
    ClipEffect {
        key: "win",
        description: "victory",
        default_range: ClipRange::new(2.5, 3.5),
    },
    ClipEffect {
        key: "lose",
        description: "defeat",
        default_range: ClipRange::new(3.5, 4.5),
    },
    ClipEffect {
        key: "landlord",
        description: "become landlord",
        default_range: ClipRange::new(4.5, 5.5),
    },
];
