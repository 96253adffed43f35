/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = u8;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PassengerId(pub u64);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorStatus {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "movingUp")]
    MovingUp,
    #[serde(rename = "movingDown")]
    MovingDown,
}

/**
 * Passenger lifecycle.
 *
 * - `Spawned`:         Just appeared on a floor, about to call the elevator.
 * - `Waiting`:         Called the elevator and waits for it to open on the spawn floor.
 * - `Traveling`:       Inside the elevator, on the way to the destination.
 * - `OnDestination`:   Left the elevator on the destination floor. Terminal.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerStatus {
    #[serde(rename = "spawned")]
    Spawned,
    #[serde(rename = "waiting")]
    Waiting,
    #[serde(rename = "traveling")]
    Traveling,
    #[serde(rename = "onDestination")]
    OnDestination,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevatorStatus::Idle => write!(f, "IDLE"),
            ElevatorStatus::MovingUp => write!(f, "MOVING_UP"),
            ElevatorStatus::MovingDown => write!(f, "MOVING_DOWN"),
        }
    }
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerStatus::Spawned => write!(f, "SPAWNED"),
            PassengerStatus::Waiting => write!(f, "WAITING"),
            PassengerStatus::Traveling => write!(f, "TRAVELING"),
            PassengerStatus::OnDestination => write!(f, "ON_DESTINATION"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElevatorSnapshot {
    pub floor: Floor,
    pub status: ElevatorStatus,
    #[serde(rename = "doorsOpen")]
    pub doors_open: bool,
    pub calls: Vec<Floor>,
    pub stops: Vec<Floor>,
    pub passengers: Vec<PassengerId>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PassengerSnapshot {
    pub id: PassengerId,
    pub status: PassengerStatus,
    #[serde(rename = "spawnFloor")]
    pub spawn_floor: Floor,
    pub destination: Floor,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TickSnapshot {
    pub tick: u64,
    pub elevator: ElevatorSnapshot,
    pub passengers: Vec<PassengerSnapshot>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub ticks: u64,
    #[serde(rename = "passengersSpawned")]
    pub passengers_spawned: usize,
    #[serde(rename = "passengersServed")]
    pub passengers_served: usize,
}

impl fmt::Display for PassengerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passenger. Id: {}, Status: {}, Spawn floor: {}, Dest: {}",
            self.id, self.status, self.spawn_floor, self.destination
        )
    }
}
