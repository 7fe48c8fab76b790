//! Game configuration loaded from TOML.

use crate::layout::Layout;
use derive_getters::Getters;
use derive_more::{Display, Error};
use gobblet_rules::{GameSetup, PIECES_PER_SIZE, Player, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a Gobblet session.
///
/// ```toml
/// first_player = "yellow"
/// move_limit = 60
///
/// [layout]
/// cell_size = 100
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player who moves first.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Moves after which the game is drawn (unlimited when absent).
    #[serde(default)]
    move_limit: Option<usize>,

    /// Screen geometry used for click hit-testing.
    #[serde(default)]
    layout: Layout,
}

#[instrument]
fn default_first_player() -> Player {
    Player::Red
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: default_first_player(),
            move_limit: None,
            layout: Layout::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_player = %config.first_player, move_limit = ?config.move_limit, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the first player.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Builds the setup phase described by this configuration.
    pub fn setup(&self) -> GameSetup {
        match self.move_limit {
            Some(limit) => GameSetup::new().with_move_limit(limit),
            None => GameSetup::new(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.move_limit == Some(0) {
            return Err(ConfigError::new("move_limit must be at least 1".to_string()));
        }
        validate_layout(&self.layout)
    }
}

/// Rejects geometry that would put the board or reserves off screen.
fn validate_layout(layout: &Layout) -> Result<(), ConfigError> {
    let positive = [
        ("screen_width", layout.screen_width),
        ("screen_height", layout.screen_height),
        ("cell_size", layout.cell_size),
        ("large_radius", layout.large_radius),
        ("medium_radius", layout.medium_radius),
        ("small_radius", layout.small_radius),
        ("reserve_row_spacing", layout.reserve_row_spacing),
    ];
    for (name, value) in positive {
        if value <= 0 {
            return Err(ConfigError::new(format!("layout.{} must be positive", name)));
        }
    }

    let non_negative = [
        ("board_offset_y", layout.board_offset_y),
        ("reserve_margin", layout.reserve_margin),
        ("reserve_top", layout.reserve_top),
        ("reserve_stack_dx", layout.reserve_stack_dx),
        ("reserve_stack_dy", layout.reserve_stack_dy),
    ];
    for (name, value) in non_negative {
        if value < 0 {
            return Err(ConfigError::new(format!("layout.{} must not be negative", name)));
        }
    }

    let span = layout
        .cell_size
        .checked_mul(3)
        .filter(|span| *span <= layout.screen_width)
        .ok_or_else(|| ConfigError::new("Board is wider than layout.screen_width".to_string()))?;
    layout
        .board_offset_y
        .checked_add(span)
        .filter(|bottom| *bottom <= layout.screen_height)
        .ok_or_else(|| ConfigError::new("Board is taller than layout.screen_height".to_string()))?;

    let extra = i32::from(PIECES_PER_SIZE) - 1;
    layout
        .reserve_stack_dx
        .checked_mul(extra)
        .filter(|fan| *fan <= layout.reserve_margin && layout.reserve_margin <= layout.screen_width)
        .ok_or_else(|| ConfigError::new("Reserve pieces run off the screen edge".to_string()))?;

    let rows = Size::ALL.len() as i32 - 1;
    layout
        .reserve_row_spacing
        .checked_mul(rows)
        .and_then(|down| down.checked_add(layout.reserve_top))
        .and_then(|down| {
            layout
                .reserve_stack_dy
                .checked_mul(extra)
                .and_then(|fan| down.checked_add(fan))
        })
        .filter(|bottom| *bottom <= layout.screen_height)
        .ok_or_else(|| ConfigError::new("Reserve pieces run off the screen bottom".to_string()))?;

    Ok(())
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
