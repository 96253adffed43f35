pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::ConfigError;
pub use errors::ForbiddenAction;
pub use errors::SimulationError;
pub use structs::ElevatorSnapshot;
pub use structs::ElevatorStatus;
pub use structs::Floor;
pub use structs::PassengerId;
pub use structs::PassengerSnapshot;
pub use structs::PassengerStatus;
pub use structs::SimulationSummary;
pub use structs::TickSnapshot;
