/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use serde::Serialize;
use std::io::{self, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{PassengerSnapshot, SimulationSummary, TickSnapshot};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SimEvent {
    PassengerSpawned {
        tick: u64,
        passenger: PassengerSnapshot,
    },
    PassengerArrived {
        tick: u64,
        passenger: PassengerSnapshot,
    },
    TickCompleted(TickSnapshot),
    Finished(SimulationSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/**
 * Renders simulation events for a human or a machine.
 *
 * The simulator only publishes events on its channel; the reporter drains them on
 * the same thread and writes them to `out`, either as a console report or as one
 * JSON object per line.
 *
 * # Fields
 * - `events_rx`:   Receives events published by the simulator.
 * - `format`:      Output format.
 * - `out`:         Destination of the report, usually stdout.
 */
pub struct Reporter<W: Write> {
    events_rx: cbc::Receiver<SimEvent>,
    format: ReportFormat,
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(events_rx: cbc::Receiver<SimEvent>, format: ReportFormat, out: W) -> Reporter<W> {
        Reporter {
            events_rx,
            format,
            out,
        }
    }

    /// Writes every event published so far. Returns how many were written.
    pub fn drain(&mut self) -> io::Result<usize> {
        let mut written = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            match self.format {
                ReportFormat::Text => self.write_text(&event)?,
                ReportFormat::Json => {
                    serde_json::to_writer(&mut self.out, &event)?;
                    writeln!(self.out)?;
                }
            }
            written += 1;
        }
        self.out.flush()?;
        Ok(written)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_text(&mut self, event: &SimEvent) -> io::Result<()> {
        match event {
            SimEvent::PassengerSpawned { passenger, .. } => {
                writeln!(self.out, "(+) New passenger: {}", passenger)
            }
            SimEvent::PassengerArrived { passenger, .. } => {
                writeln!(self.out, "(!) Passenger reached destination: {}", passenger)
            }
            SimEvent::TickCompleted(snapshot) => self.write_tick(snapshot),
            SimEvent::Finished(summary) => writeln!(
                self.out,
                "Passengers served: {} in {} ticks",
                summary.passengers_served, summary.ticks
            ),
        }
    }

    fn write_tick(&mut self, snapshot: &TickSnapshot) -> io::Result<()> {
        let elevator = &snapshot.elevator;

        writeln!(self.out, "{}", "=".repeat(100))?;
        writeln!(self.out, "Tick {}", snapshot.tick)?;
        writeln!(self.out, "Elevator state:")?;
        writeln!(self.out, "\t Floor: {}", elevator.floor)?;
        let on_board: Vec<u64> = elevator.passengers.iter().map(|id| id.0).collect();
        writeln!(self.out, "\t Passengers: {:?}", on_board)?;
        writeln!(self.out, "\t Calls: {:?}", elevator.calls)?;
        writeln!(self.out, "\t Stops: {:?}", elevator.stops)?;
        writeln!(self.out, "\t Status: {}", elevator.status)?;
        writeln!(
            self.out,
            "\t Doors: {}",
            if elevator.doors_open { "open" } else { "closed" }
        )?;

        if !snapshot.passengers.is_empty() {
            writeln!(self.out, "Passengers:")?;
        }
        for passenger in &snapshot.passengers {
            writeln!(self.out, "\t {}", passenger)?;
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
