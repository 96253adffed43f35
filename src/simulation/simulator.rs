/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{Config, SimulationConfig};
use crate::elevator::Elevator;
use crate::passenger::Passenger;
use crate::shared::{
    ConfigError, PassengerId, SimulationError, SimulationSummary, TickSnapshot,
};
use crate::simulation::reporter::SimEvent;
use crate::simulation::spawner::{PassengerSource, RandomSource, SpawnRequest};

/**
 * Drives one simulation run.
 *
 * The `Simulator` owns the elevator and the live passengers, and advances them one
 * tick at a time: maybe spawn a passenger, let every live passenger act in spawn
 * order, drop those that arrived, then step the elevator. Everything worth observing
 * is published on `events_tx`.
 *
 * # Fields
 * - `config`:              Driver loop knobs.
 * - `elevator`:            The elevator being simulated.
 * - `passengers`:          Live passengers in spawn order.
 * - `source`:              Where new passengers come from.
 * - `events_tx`:           Publishes spawn, arrival and tick events to the reporter.
 * - `ticks`:               Number of completed ticks.
 * - `next_id`:             Id handed to the next spawned passenger.
 * - `passengers_spawned`:  Passengers spawned so far.
 * - `passengers_served`:   Passengers that reached their destination so far.
 */
pub struct Simulator {
    config: SimulationConfig,
    elevator: Elevator,
    passengers: Vec<Passenger>,
    source: Box<dyn PassengerSource>,
    events_tx: cbc::Sender<SimEvent>,
    ticks: u64,
    next_id: u64,
    passengers_spawned: usize,
    passengers_served: usize,
}

impl Simulator {
    pub fn new(
        config: &Config,
        source: Box<dyn PassengerSource>,
        events_tx: cbc::Sender<SimEvent>,
    ) -> Result<Simulator, ConfigError> {
        config.validate()?;

        Ok(Simulator {
            config: config.simulation.clone(),
            elevator: Elevator::new(&config.elevator)?,
            passengers: Vec::new(),
            source,
            events_tx,
            ticks: 0,
            next_id: 1,
            passengers_spawned: 0,
            passengers_served: 0,
        })
    }

    /// Simulator fed by a `RandomSource` built from the configuration.
    pub fn with_random_source(
        config: &Config,
        events_tx: cbc::Sender<SimEvent>,
    ) -> Result<Simulator, ConfigError> {
        let source = RandomSource::new(config.simulation.spawn_probability, config.simulation.seed);
        Simulator::new(config, Box::new(source), events_tx)
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn passengers_spawned(&self) -> usize {
        self.passengers_spawned
    }

    pub fn passengers_served(&self) -> usize {
        self.passengers_served
    }

    pub fn max_passengers_reached(&self) -> bool {
        self.passengers.len() >= self.config.max_passengers
    }

    pub fn total_passengers_reached(&self) -> bool {
        self.passengers_spawned >= self.config.total_passengers
    }

    /// Every passenger of the run has been spawned and served.
    pub fn is_finished(&self) -> bool {
        self.passengers.is_empty() && self.total_passengers_reached()
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            ticks: self.ticks,
            passengers_spawned: self.passengers_spawned,
            passengers_served: self.passengers_served,
        }
    }

    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            tick: self.ticks,
            elevator: self.elevator.snapshot(),
            passengers: self.passengers.iter().map(Passenger::snapshot).collect(),
        }
    }

    /// Advances the whole simulation by one tick.
    pub fn tick(&mut self) {
        self.ticks += 1;

        self.spawn_passenger();
        self.perform_passengers_actions();
        self.elevator.step();

        self.publish(SimEvent::TickCompleted(self.snapshot()));
    }

    /// Ticks until every passenger has been served, calling `after_tick` after each
    /// tick. Fails once `max_ticks` ticks have passed without finishing.
    pub fn run<F: FnMut()>(
        &mut self,
        mut after_tick: F,
    ) -> Result<SimulationSummary, SimulationError> {
        self.publish(SimEvent::TickCompleted(self.snapshot()));

        while !self.is_finished() {
            if let Some(max_ticks) = self.config.max_ticks {
                if self.ticks >= max_ticks {
                    return Err(SimulationError::TickLimitReached {
                        ticks: self.ticks,
                        live_passengers: self.passengers.len(),
                    });
                }
            }

            self.tick();
            after_tick();
        }

        let summary = self.summary();
        debug!(
            "Passengers served: {} in {} ticks",
            summary.passengers_served, summary.ticks
        );
        self.publish(SimEvent::Finished(summary.clone()));
        Ok(summary)
    }

    fn spawn_passenger(&mut self) {
        if self.max_passengers_reached() || self.total_passengers_reached() {
            return;
        }

        let n_floors = self.elevator.n_floors();
        let Some(request) = self.source.next_request(n_floors) else {
            return;
        };

        if !Self::is_valid_request(&request, n_floors) {
            warn!(
                "Skipping passenger from {} to {} in a {} floor building",
                request.spawn_floor, request.destination, n_floors
            );
            return;
        }

        let passenger = Passenger::new(
            PassengerId(self.next_id),
            request.spawn_floor,
            request.destination,
        );
        self.next_id += 1;
        self.passengers_spawned += 1;

        debug!("(+) New passenger: {}", passenger);
        self.publish(SimEvent::PassengerSpawned {
            tick: self.ticks,
            passenger: passenger.snapshot(),
        });
        self.passengers.push(passenger);
    }

    fn perform_passengers_actions(&mut self) {
        for passenger in self.passengers.iter_mut() {
            passenger.act_on_status(&mut self.elevator);
        }

        let (arrived, live): (Vec<Passenger>, Vec<Passenger>) =
            std::mem::take(&mut self.passengers)
                .into_iter()
                .partition(Passenger::has_arrived);
        self.passengers = live;

        for passenger in arrived {
            self.passengers_served += 1;
            debug!("(!) Passenger reached destination: {}", passenger);
            self.publish(SimEvent::PassengerArrived {
                tick: self.ticks,
                passenger: passenger.snapshot(),
            });
        }
    }

    fn is_valid_request(request: &SpawnRequest, n_floors: u8) -> bool {
        let in_building = |floor: u8| floor >= 1 && floor <= n_floors;
        in_building(request.spawn_floor)
            && in_building(request.destination)
            && request.spawn_floor != request.destination
    }

    // Nobody listening is fine, events are only observational
    fn publish(&self, event: SimEvent) {
        let _ = self.events_tx.send(event);
    }
}
