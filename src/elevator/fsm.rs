/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::shared::{
    ConfigError, ElevatorSnapshot, ElevatorStatus, Floor, ForbiddenAction, PassengerId,
};

/**
 * Single elevator with greedy directional dispatch.
 *
 * The `Elevator` keeps moving in its current direction while there are calls or stops
 * further along it, and reverses only once that direction is exhausted. It advances one
 * floor per `step`, and opens its doors on arrival at a floor with a pending stop, or
 * with a pending call when there is room left inside.
 *
 * # Fields
 * - `current_floor`:   Floor the elevator is on, always in `1..=n_floors`.
 * - `n_floors`:        Number of floors served.
 * - `capacity`:        Maximum number of passengers inside.
 * - `doors_open`:      Open from a servicing step until the start of the next step.
 * - `status`:          Idle or moving direction.
 * - `calls`:           Floors where somebody waits to be picked up.
 * - `stops`:           Floors where somebody inside wants to get off.
 * - `passengers`:      Ids of the passengers currently inside.
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    current_floor: Floor,
    n_floors: Floor,
    capacity: usize,
    doors_open: bool,
    status: ElevatorStatus,
    calls: BTreeSet<Floor>,
    stops: BTreeSet<Floor>,
    passengers: BTreeSet<PassengerId>,
}

impl Elevator {
    pub fn new(config: &ElevatorConfig) -> Result<Elevator, ConfigError> {
        config.validate()?;

        Ok(Elevator {
            current_floor: config.initial_floor,
            n_floors: config.n_floors,
            capacity: config.capacity,
            doors_open: false,
            status: ElevatorStatus::Idle,
            calls: BTreeSet::new(),
            stops: BTreeSet::new(),
            passengers: BTreeSet::new(),
        })
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn n_floors(&self) -> Floor {
        self.n_floors
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn doors_open(&self) -> bool {
        self.doors_open
    }

    pub fn status(&self) -> ElevatorStatus {
        self.status
    }

    pub fn calls(&self) -> &BTreeSet<Floor> {
        &self.calls
    }

    pub fn stops(&self) -> &BTreeSet<Floor> {
        &self.stops
    }

    pub fn passengers(&self) -> &BTreeSet<PassengerId> {
        &self.passengers
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() == self.capacity
    }

    /// Advances the elevator by one tick.
    ///
    /// Stops are always serviced. Calls are serviced only when there is room for
    /// another passenger, otherwise they stay pending for a later pass.
    pub fn step(&mut self) {
        self.close_doors();

        self.update_status();
        self.move_one_floor();

        if self.stops.remove(&self.current_floor) {
            self.open_doors();
        }

        if !self.is_full() && self.calls.remove(&self.current_floor) {
            self.open_doors();
        }
    }

    pub fn call(&mut self, floor: Floor) {
        if floor < 1 || floor > self.n_floors {
            warn!("Ignoring call to floor {} outside 1..={}", floor, self.n_floors);
            return;
        }
        if self.calls.insert(floor) {
            debug!("New call on {} floor", floor);
        }
    }

    pub fn enter(
        &mut self,
        passenger: PassengerId,
        destination: Floor,
    ) -> Result<(), ForbiddenAction> {
        if self.is_full() {
            return Err(ForbiddenAction::ElevatorFull);
        }
        if !self.doors_open {
            return Err(ForbiddenAction::DoorsClosed);
        }

        self.passengers.insert(passenger);
        self.stops.insert(destination);
        Ok(())
    }

    pub fn leave(&mut self, passenger: PassengerId) -> Result<(), ForbiddenAction> {
        if !self.doors_open {
            return Err(ForbiddenAction::DoorsClosed);
        }
        if !self.passengers.remove(&passenger) {
            return Err(ForbiddenAction::NotOnBoard(passenger));
        }
        Ok(())
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            floor: self.current_floor,
            status: self.status,
            doors_open: self.doors_open,
            calls: self.calls.iter().copied().collect(),
            stops: self.stops.iter().copied().collect(),
            passengers: self.passengers.iter().copied().collect(),
        }
    }

    pub(crate) fn update_status(&mut self) {
        let pending: BTreeSet<Floor> = self.calls.union(&self.stops).copied().collect();
        let floor = self.current_floor;

        let next_status = if pending.is_empty() {
            ElevatorStatus::Idle
        } else {
            match self.status {
                ElevatorStatus::Idle => match Self::nearest_target(floor, &pending) {
                    Some(target) if target > floor => ElevatorStatus::MovingUp,
                    Some(_) => ElevatorStatus::MovingDown,
                    // Only the current floor is pending, which happens when a call here
                    // could not be serviced because the elevator is full.
                    None => ElevatorStatus::Idle,
                },
                ElevatorStatus::MovingUp if !pending.iter().any(|&f| f > floor) => {
                    ElevatorStatus::MovingDown
                }
                ElevatorStatus::MovingDown if !pending.iter().any(|&f| f < floor) => {
                    ElevatorStatus::MovingUp
                }
                status => status,
            }
        };

        if next_status != self.status {
            debug!("Status {} -> {} on {} floor", self.status, next_status, floor);
            self.status = next_status;
        }
    }

    // Nearest pending floor other than `floor`, the lower one on a tie
    fn nearest_target(floor: Floor, pending: &BTreeSet<Floor>) -> Option<Floor> {
        pending
            .iter()
            .copied()
            .filter(|&f| f != floor)
            .min_by_key(|&f| (f.abs_diff(floor), f))
    }

    fn move_one_floor(&mut self) {
        match self.status {
            ElevatorStatus::MovingUp if self.current_floor < self.n_floors => {
                self.current_floor += 1;
                debug!("Moving up to {} floor", self.current_floor);
            }
            ElevatorStatus::MovingDown if self.current_floor > 1 => {
                self.current_floor -= 1;
                debug!("Moving down to {} floor", self.current_floor);
            }
            _ => {}
        }
    }

    fn open_doors(&mut self) {
        if !self.doors_open {
            debug!("Opening doors on {} floor", self.current_floor);
        }
        self.doors_open = true;
    }

    fn close_doors(&mut self) {
        if self.doors_open {
            debug!("Closing doors on {} floor", self.current_floor);
        }
        self.doors_open = false;
    }
}
