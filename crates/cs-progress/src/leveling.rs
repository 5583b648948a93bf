//! Experience thresholds and level-up resolution.
//!
//! Reaching level `n + 1` from level `n` costs `floor(100 * 1.5^(n-1))`
//! experience. Experience kept on the profile is always the remainder
//! after every affordable level-up has been paid for.

use crate::error::{ProgressError, ProgressResult};
use crate::profile::Profile;
use crate::tier::CultivationTier;

/// Experience needed to advance past `level`.
pub fn required_exp(level: u32) -> u64 {
    let exponent = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
    (100.0 * 1.5_f64.powi(exponent)).floor() as u64
}

impl Profile {
    /// Experience needed to advance past the current level.
    pub fn required_exp(&self) -> u64 {
        required_exp(self.level)
    }

    /// Gain `amount` experience, scaled by the sect bonus and truncated.
    ///
    /// Levels up as many times as the total allows and refreshes the
    /// cultivation tier. Returns whether at least one level was gained.
    pub fn gain_experience(&mut self, amount: i64) -> ProgressResult<bool> {
        let amount = u64::try_from(amount).map_err(|_| ProgressError::NegativeExperience(amount))?;
        Ok(self.add_scaled(amount))
    }

    /// Gain a reward amount, which cannot be negative, through the sect
    /// multiplier. Returns whether at least one level was gained.
    pub fn award(&mut self, amount: u32) -> bool {
        self.add_scaled(u64::from(amount))
    }

    /// Restore a saved level and experience.
    ///
    /// A level below 1 is raised to 1. Experience beyond the current
    /// threshold is resolved into level-ups, and the tier is recomputed
    /// from the resulting level.
    pub fn restore_level(&mut self, level: u32, experience: u64) {
        self.level = level.max(1);
        self.experience = experience;
        self.resolve_level_ups();
        self.tier = CultivationTier::for_level(self.level);
    }

    fn add_scaled(&mut self, amount: u64) -> bool {
        let scaled = (amount as f64 * self.sect_bonus()).trunc() as u64;
        self.experience = self.experience.saturating_add(scaled);
        self.resolve_level_ups()
    }

    fn resolve_level_ups(&mut self) -> bool {
        let start = self.level;
        while self.level < u32::MAX && self.experience >= required_exp(self.level) {
            self.experience -= required_exp(self.level);
            self.level += 1;
            let tier = CultivationTier::for_level(self.level);
            if tier != self.tier {
                log::info!("{} advanced to {}", self.name, tier);
                self.tier = tier;
            }
        }
        if self.level > start {
            log::debug!("{} reached level {}", self.name, self.level);
        }
        self.level > start
    }
}
