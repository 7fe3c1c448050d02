//! Tunable constants of the point and standing formulas.

/// Points available before any choice is made.
pub const DEFAULT_BASE_POINTS: i32 = 0;

/// Score every ability starts from before modifiers.
pub const DEFAULT_ABILITY_BASE: i32 = 10;

/// Bound of a faction standing, in both directions.
pub const DEFAULT_MAX_FACTION_VALUE: i32 = 5;

/// Configuration for the budget engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Points available with nothing selected.
    pub base_points: i32,
    /// Base score of every ability.
    pub ability_base: i32,
    /// Standings are clamped into `[-max_faction_value, max_faction_value]`.
    pub max_faction_value: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_points: DEFAULT_BASE_POINTS,
            ability_base: DEFAULT_ABILITY_BASE,
            max_faction_value: DEFAULT_MAX_FACTION_VALUE,
        }
    }
}

impl EngineConfig {
    /// Set the starting point budget.
    pub fn with_base_points(mut self, points: i32) -> Self {
        self.base_points = points;
        self
    }

    /// Set the base ability score.
    pub fn with_ability_base(mut self, base: i32) -> Self {
        self.ability_base = base;
        self
    }

    /// Set the faction standing bound (negative values become 0).
    pub fn with_max_faction_value(mut self, max: i32) -> Self {
        self.max_faction_value = max.max(0);
        self
    }
}
