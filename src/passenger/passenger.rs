/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{Floor, PassengerId, PassengerSnapshot, PassengerStatus};

/**
 * A passenger travelling from `spawn_floor` to `destination`.
 *
 * The passenger is driven one tick at a time through `act_on_status`, reacting to
 * what the elevator currently shows (floor and doors).
 *
 * Possible status transitions:
 * - `Spawned`:         `Waiting`
 * - `Waiting`:         `Spawned`, `Traveling`
 * - `Traveling`:       `OnDestination`
 * - `OnDestination`:   -
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    id: PassengerId,
    spawn_floor: Floor,
    destination: Floor,
    status: PassengerStatus,
}

impl Passenger {
    pub fn new(id: PassengerId, spawn_floor: Floor, destination: Floor) -> Passenger {
        debug_assert_ne!(spawn_floor, destination);

        Passenger {
            id,
            spawn_floor,
            destination,
            status: PassengerStatus::Spawned,
        }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn spawn_floor(&self) -> Floor {
        self.spawn_floor
    }

    pub fn destination(&self) -> Floor {
        self.destination
    }

    pub fn status(&self) -> PassengerStatus {
        self.status
    }

    pub fn has_arrived(&self) -> bool {
        self.status == PassengerStatus::OnDestination
    }

    /// Runs every transition that applies to the current status, each at most once.
    /// A status reached during the call is acted on in the same call.
    pub fn act_on_status(&mut self, elevator: &mut Elevator) {
        // Call the elevator when spawned
        if self.status == PassengerStatus::Spawned {
            elevator.call(self.spawn_floor);
            self.status = PassengerStatus::Waiting;
        }

        // Try to enter the elevator on the spawn floor
        if self.status == PassengerStatus::Waiting
            && elevator.current_floor() == self.spawn_floor
            && elevator.doors_open()
        {
            match elevator.enter(self.id, self.destination) {
                Ok(()) => self.status = PassengerStatus::Traveling,
                Err(reason) => {
                    // Back to Spawned so the call is issued again on the next tick.
                    debug!("Passenger {} could not board: {}", self.id, reason);
                    self.status = PassengerStatus::Spawned;
                }
            }
        }

        // Try to leave the elevator on the destination floor
        if self.status == PassengerStatus::Traveling
            && elevator.current_floor() == self.destination
            && elevator.doors_open()
        {
            match elevator.leave(self.id) {
                Ok(()) => self.status = PassengerStatus::OnDestination,
                Err(reason) => debug!("Passenger {} could not leave: {}", self.id, reason),
            }
        }
    }

    pub fn snapshot(&self) -> PassengerSnapshot {
        PassengerSnapshot {
            id: self.id,
            status: self.status,
            spawn_floor: self.spawn_floor,
            destination: self.destination,
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
