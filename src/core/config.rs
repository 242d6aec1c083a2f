//! Game configuration and compile-time constants.
//!
//! The category catalog and the point tiers are fixed. `GameConfig`
//! bundles them with the tunable knobs (countdown durations, default
//! team names, mission prompt template) that the engine reads at runtime.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::team::{Inventory, TeamId, TeamPair};

/// The fixed category catalog, in display order.
pub const CATEGORY_NAMES: [&str; 12] = [
    "Folk Proverbs",
    "Football",
    "Car Brands",
    "Spacetoon",
    "Capitals",
    "Dishes",
    "Technology",
    "Gaming",
    "Science",
    "History",
    "Geography",
    "Movies",
];

/// Point tiers available on every board lane.
pub const POINT_VALUES: [u32; 3] = [100, 200, 300];

/// Challenge duration per point tier, in seconds.
pub const COUNTDOWN_SECONDS: [(u32, u32); 3] = [(100, 30), (200, 45), (300, 60)];

/// Challenge duration for point values missing from the table.
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 30;

/// Categories drafted per game.
pub const DRAFT_SIZE: usize = 6;

/// Answered cells that end the game.
pub const FINALE_THRESHOLD: usize = 18;

/// Manual score correction increment.
pub const SCORE_STEP: i64 = 100;

/// Bid every auction opens at.
pub const OPENING_BID: u32 = 1;

/// Power-ups each team starts with.
pub const STARTING_INVENTORY: Inventory = Inventory::new(1, 1);

/// Placeholder substituted with the category name in the mission prompt.
pub const MISSION_PLACEHOLDER: &str = "{category}";

/// Default mission prompt template.
pub const MISSION_TEMPLATE: &str = "Name as many answers as you can for: {category}";

/// Category identifier: the position in [`CATEGORY_NAMES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Category catalog (built from [`CATEGORY_NAMES`]).
    categories: Vec<Category>,

    /// Point tiers (see [`POINT_VALUES`]).
    point_values: [u32; 3],

    /// Challenge seconds keyed by point value.
    pub countdown_seconds: FxHashMap<u32, u32>,

    /// Challenge seconds for unmapped point values.
    pub default_countdown_seconds: u32,

    /// Names used when a team is started without one.
    pub default_team_names: TeamPair<String>,

    /// Mission prompt template containing [`MISSION_PLACEHOLDER`].
    pub mission_template: String,

    draft_size: usize,
    finale_threshold: usize,
    opening_bid: u32,
    starting_inventory: Inventory,
}

impl Default for GameConfig {
    fn default() -> Self {
        let categories = CATEGORY_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Category::new(CategoryId::new(i as u16), *name))
            .collect();

        Self {
            categories,
            point_values: POINT_VALUES,
            countdown_seconds: COUNTDOWN_SECONDS.iter().copied().collect(),
            default_countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            default_team_names: TeamPair::new(|t| format!("Team {}", t.index() + 1)),
            mission_template: MISSION_TEMPLATE.to_string(),
            draft_size: DRAFT_SIZE,
            finale_threshold: FINALE_THRESHOLD,
            opening_bid: OPENING_BID,
            starting_inventory: STARTING_INVENTORY,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the challenge duration for one point tier.
    #[must_use]
    pub fn with_countdown(mut self, points: u32, seconds: u32) -> Self {
        self.countdown_seconds.insert(points, seconds);
        self
    }

    /// Set the fallback challenge duration.
    #[must_use]
    pub fn with_default_countdown(mut self, seconds: u32) -> Self {
        self.default_countdown_seconds = seconds;
        self
    }

    /// Set the fallback team names.
    #[must_use]
    pub fn with_default_team_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.default_team_names[TeamId::FIRST] = first.into();
        self.default_team_names[TeamId::SECOND] = second.into();
        self
    }

    /// Set the mission prompt template.
    #[must_use]
    pub fn with_mission_template(mut self, template: impl Into<String>) -> Self {
        self.mission_template = template.into();
        self
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn point_values(&self) -> [u32; 3] {
        self.point_values
    }

    /// Categories drafted before the board opens.
    #[must_use]
    pub fn draft_size(&self) -> usize {
        self.draft_size
    }

    /// Answered cells that end the game.
    #[must_use]
    pub fn finale_threshold(&self) -> usize {
        self.finale_threshold
    }

    #[must_use]
    pub fn opening_bid(&self) -> u32 {
        self.opening_bid
    }

    #[must_use]
    pub fn starting_inventory(&self) -> Inventory {
        self.starting_inventory
    }

    /// Get a category by ID.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Check if `points` is one of the board tiers.
    #[must_use]
    pub fn is_point_value(&self, points: u32) -> bool {
        self.point_values.contains(&points)
    }

    /// Challenge seconds for a point value, falling back to the default.
    #[must_use]
    pub fn countdown_for(&self, points: u32) -> u32 {
        self.countdown_seconds
            .get(&points)
            .copied()
            .unwrap_or(self.default_countdown_seconds)
    }

    /// Trimmed team name, or the configured default when blank.
    #[must_use]
    pub fn team_name_or_default(&self, team: TeamId, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.default_team_names[team].clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Render the mission prompt for a category.
    #[must_use]
    pub fn mission_for(&self, category_name: &str) -> String {
        self.mission_template.replace(MISSION_PLACEHOLDER, category_name)
    }
}
