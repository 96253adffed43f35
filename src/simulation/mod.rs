pub mod reporter;
pub mod simulator;
pub mod spawner;

pub use reporter::{ReportFormat, Reporter, SimEvent};
pub use simulator::Simulator;
pub use spawner::{PassengerSource, RandomSource, ScriptedSource, SpawnRequest};
