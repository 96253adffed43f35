/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ConfigError, Floor};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub capacity: usize,
    pub n_floors: Floor,
    pub initial_floor: Floor,
}

/**
 * Driver loop knobs.
 *
 * # Fields
 * - `max_passengers`:      How many passengers may be live at the same time.
 * - `total_passengers`:    How many passengers to spawn over the whole run.
 * - `spawn_probability`:   Chance in percent that a passenger spawns on a tick.
 * - `seed`:                Seed for the random spawner. Random when absent.
 * - `max_ticks`:           Abort the run after this many ticks. Unbounded when absent.
 */
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub max_passengers: usize,
    pub total_passengers: usize,
    pub spawn_probability: u8,
    pub seed: Option<u64>,
    pub max_ticks: Option<u64>,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            capacity: 5,
            n_floors: 10,
            initial_floor: 1,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            max_passengers: 2,
            total_passengers: 15,
            spawn_probability: 50,
            seed: None,
            max_ticks: None,
        }
    }
}

impl ElevatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "n_floors must be at least 2, got {}",
                self.n_floors
            )));
        }
        if self.capacity < 1 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }
        if self.initial_floor < 1 || self.initial_floor > self.n_floors {
            return Err(ConfigError::Invalid(format!(
                "initial_floor must be in 1..={}, got {}",
                self.n_floors, self.initial_floor
            )));
        }
        Ok(())
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_probability > 100 {
            return Err(ConfigError::Invalid(format!(
                "spawn_probability is a percentage, got {}",
                self.spawn_probability
            )));
        }
        if self.max_passengers < 1 && self.total_passengers > 0 {
            return Err(ConfigError::Invalid(
                "max_passengers must be at least 1 when passengers are to be served".into(),
            ));
        }
        // Nobody would ever spawn and the run could not end
        let never_spawns = self.spawn_probability == 0 && self.total_passengers > 0;
        if never_spawns && self.max_ticks.is_none() {
            return Err(ConfigError::Invalid(
                "spawn_probability of 0 needs max_ticks when passengers are to be served".into(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.elevator.validate()?;
        self.simulation.validate()
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

/// Loads `path` when given. Otherwise falls back to `config.toml` in the working
/// directory, and to the built-in defaults when that file does not exist either.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                warn!("No configuration file found, using default settings...");
                Ok(Config::default())
            }
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
