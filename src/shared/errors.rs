/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::PassengerId;

/***************************************/
/*               Errors                */
/***************************************/

/// Refusal of `enter`/`leave`. Expected during normal operation; the passenger
/// reacts to it on the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenAction {
    /// The elevator already carries `capacity` passengers.
    ElevatorFull,
    /// Doors are closed on the current floor.
    DoorsClosed,
    /// The passenger tried to leave an elevator it is not inside.
    NotOnBoard(PassengerId),
}

impl fmt::Display for ForbiddenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForbiddenAction::ElevatorFull => write!(f, "Elevator is full"),
            ForbiddenAction::DoorsClosed => write!(f, "Doors are closed"),
            ForbiddenAction::NotOnBoard(id) => {
                write!(f, "Passenger {id} is not inside the elevator")
            }
        }
    }
}

impl std::error::Error for ForbiddenAction {}

/// Failure to load or validate a configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read configuration file: {e}"),
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration file: {e}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The run hit `max_ticks` before every passenger was served.
    TickLimitReached { ticks: u64, live_passengers: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::TickLimitReached {
                ticks,
                live_passengers,
            } => write!(
                f,
                "Tick limit of {ticks} reached with {live_passengers} passenger(s) still live"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}
