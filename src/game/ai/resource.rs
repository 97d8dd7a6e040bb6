//! AI configuration: game mode and difficulty
//!
//! # Game Modes
//!
//! - **TwoPlayer**: two humans share the console (hot-seat)
//! - **VsAI**: one human against the opponent, which plays `ai_color`
//!
//! # Difficulty Levels
//!
//! Difficulty selects the move-selection strategy and the rating K-factor:
//!
//! | Difficulty | Strategy                               | K-factor |
//! |------------|----------------------------------------|----------|
//! | Easy       | Uniform random                         | 10       |
//! | Medium     | Random capture, else random move       | 20       |
//! | Hard       | Learned move, else static evaluation   | 30       |

use std::fmt;

use chess_engine::Color;
use serde::{Deserialize, Serialize};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Both sides are entered at the console
    TwoPlayer,
    /// Human vs AI opponent; the AI controls `ai_color`
    VsAI { ai_color: Color },
}

impl GameMode {
    /// Mode for a human playing `human_color` against the AI
    pub fn vs_ai(human_color: Color) -> Self {
        GameMode::VsAI {
            ai_color: human_color.opponent(),
        }
    }

    /// Get the AI player's color, if there is one
    pub fn ai_color(self) -> Option<Color> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsAI { ai_color } => Some(ai_color),
        }
    }

    pub fn human_color(self) -> Option<Color> {
        self.ai_color().map(Color::opponent)
    }

    /// Is `to_move` controlled by the AI?
    pub fn is_ai_turn(self, to_move: Color) -> bool {
        self.ai_color() == Some(to_move)
    }

    /// Players line used in game records
    pub fn players_label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsAI { .. } => "Player vs AI",
        }
    }

    /// Only games against the AI affect the rating
    pub fn is_rated(self) -> bool {
        matches!(self, GameMode::VsAI { .. })
    }
}

/// AI difficulty levels
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum AIDifficulty {
    /// Random moves; self-check is only avoided when already in check
    Easy,

    /// Prefers any capture, otherwise random
    #[default]
    Medium,

    /// Learns from recorded games, falls back to capture value plus advancement
    Hard,
}

impl AIDifficulty {
    /// Rating points gained or lost per game at this difficulty
    pub fn k_factor(self) -> u32 {
        match self {
            AIDifficulty::Easy => 10,
            AIDifficulty::Medium => 20,
            AIDifficulty::Hard => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "Easy",
            AIDifficulty::Medium => "Medium",
            AIDifficulty::Hard => "Hard",
        }
    }

    /// Parse a record's `Difficulty:` value; `N/A` and unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(AIDifficulty::Easy),
            "medium" => Some(AIDifficulty::Medium),
            "hard" => Some(AIDifficulty::Hard),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "The AI makes random moves.",
            AIDifficulty::Medium => "The AI prefers captures but is still somewhat random.",
            AIDifficulty::Hard => "The AI weighs material and advancement, and learns from past games.",
        }
    }
}

impl fmt::Display for AIDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
