/// Settings for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub starting_chips: u64,
    pub small_blind: u64,
    pub big_blind: u64,
    /// Seed for shuffling and opponent decisions; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub const DEFAULT_CHIPS: u64 = 1000;
    pub const DEFAULT_SMALL_BLIND: u64 = 25;
    pub const DEFAULT_BIG_BLIND: u64 = 50;

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_chips == 0 {
            return Err(ConfigError::NoChips);
        }
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(ConfigError::ZeroBlind);
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::BlindOrder { small: self.small_blind, big: self.big_blind });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_chips: Self::DEFAULT_CHIPS,
            small_blind: Self::DEFAULT_SMALL_BLIND,
            big_blind: Self::DEFAULT_BIG_BLIND,
            seed: None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("starting chips must be positive")]
    NoChips,
    #[error("blinds must be positive")]
    ZeroBlind,
    #[error("small blind {small} exceeds big blind {big}")]
    BlindOrder { small: u64, big: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.starting_chips, 1000);
        assert_eq!((cfg.small_blind, cfg.big_blind), (25, 50));
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.with_seed(3).seed, Some(3));
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let base = MatchConfig::default();
        let cfg = MatchConfig { starting_chips: 0, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::NoChips));
        let cfg = MatchConfig { small_blind: 0, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroBlind));
        let cfg = MatchConfig { small_blind: 60, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::BlindOrder { small: 60, big: 50 }));
    }
}
