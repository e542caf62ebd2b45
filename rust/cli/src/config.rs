use serde::{Deserialize, Serialize};
use showdown_engine::rules::{BetLimits, DEFAULT_MAX_BET, DEFAULT_MIN_BET};
use std::fs;

pub const DEFAULT_STARTING_BALANCE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u32,
    pub min_bet: u32,
    pub max_bet: u32,
    pub seed: Option<u64>,
}

impl Config {
    pub fn limits(&self) -> BetLimits {
        BetLimits::new(self.min_bet, self.max_bet)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub min_bet: ValueSource,
    pub max_bet: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            min_bet: ValueSource::Default,
            max_bet: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            min_bet: DEFAULT_MIN_BET,
            max_bet: DEFAULT_MAX_BET,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolves defaults, then the TOML file named by `SHOWDOWN_CONFIG`, then
/// `SHOWDOWN_*` environment variables, remembering where each value came from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SHOWDOWN_CONFIG") {
        if !path.is_empty() {
            let s = fs::read_to_string(path)?;
            let f: FileConfig = toml::from_str(&s)?;
            if let Some(v) = f.starting_balance {
                cfg.starting_balance = v;
                sources.starting_balance = ValueSource::File;
            }
            if let Some(v) = f.min_bet {
                cfg.min_bet = v;
                sources.min_bet = ValueSource::File;
            }
            if let Some(v) = f.max_bet {
                cfg.max_bet = v;
                sources.max_bet = ValueSource::File;
            }
            if let Some(v) = f.seed {
                cfg.seed = Some(v);
                sources.seed = ValueSource::File;
            }
        }
    }

    if let Some(seed) = env_value("SHOWDOWN_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(balance) = env_value("SHOWDOWN_BALANCE") {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(min) = env_value("SHOWDOWN_MIN_BET") {
        cfg.min_bet = min
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid minimum bet".into()))?;
        sources.min_bet = ValueSource::Env;
    }
    if let Some(max) = env_value("SHOWDOWN_MAX_BET") {
        cfg.max_bet = max
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid maximum bet".into()))?;
        sources.max_bet = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    min_bet: Option<u32>,
    #[serde(default)]
    max_bet: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.min_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must be >=1".into(),
        ));
    }
    if cfg.min_bet > cfg.max_bet {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must not exceed max_bet".into(),
        ));
    }
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    Ok(())
}
