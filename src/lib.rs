//! Discrete-step simulation of a single elevator with greedy directional dispatch.
//!
//! The core is [`elevator::Elevator`] and the [`passenger::Passenger`] state machine.
//! [`simulation::Simulator`] drives them tick by tick, fed by a
//! [`simulation::PassengerSource`] and observed through a [`simulation::Reporter`].

/* Modules */
pub mod config;
pub mod elevator;
pub mod passenger;
pub mod shared;
pub mod simulation;

pub use elevator::Elevator;
pub use passenger::Passenger;
pub use shared::{ElevatorStatus, ForbiddenAction, PassengerId, PassengerStatus};
pub use simulation::Simulator;
