/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRequest {
    pub spawn_floor: Floor,
    pub destination: Floor,
}

/// Where new passengers come from. Consulted at most once per tick, and only on
/// ticks where the simulator is allowed to spawn.
pub trait PassengerSource {
    fn next_request(&mut self, n_floors: Floor) -> Option<SpawnRequest>;
}

/**
 * Spawns a passenger with `spawn_probability` percent chance per tick.
 *
 * The spawn floor is uniform over the building, the destination uniform over the
 * remaining floors.
 */
pub struct RandomSource {
    rng: StdRng,
    spawn_probability: u8,
}

impl RandomSource {
    pub fn new(spawn_probability: u8, seed: Option<u64>) -> RandomSource {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        RandomSource {
            rng,
            spawn_probability,
        }
    }
}

impl PassengerSource for RandomSource {
    fn next_request(&mut self, n_floors: Floor) -> Option<SpawnRequest> {
        // No destination differs from the spawn floor
        if n_floors < 2 {
            return None;
        }
        if self.rng.gen_range(1..=100u8) > self.spawn_probability {
            return None;
        }

        let spawn_floor = self.rng.gen_range(1..=n_floors);
        let mut destination = self.rng.gen_range(1..n_floors);
        if destination >= spawn_floor {
            destination += 1;
        }

        Some(SpawnRequest {
            spawn_floor,
            destination,
        })
    }
}

/// Replays a fixed script, one entry per consultation. `None` entries are ticks
/// without a spawn. Yields nothing once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<Option<SpawnRequest>>,
}

impl ScriptedSource {
    pub fn new<I>(script: I) -> ScriptedSource
    where
        I: IntoIterator<Item = Option<(Floor, Floor)>>,
    {
        ScriptedSource {
            script: script
                .into_iter()
                .map(|entry| {
                    entry.map(|(spawn_floor, destination)| SpawnRequest {
                        spawn_floor,
                        destination,
                    })
                })
                .collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PassengerSource for ScriptedSource {
    fn next_request(&mut self, _n_floors: Floor) -> Option<SpawnRequest> {
        self.script.pop_front().flatten()
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
