//! Run/stop state machine.
//!
//! ## States
//!
//! ```text
//!             run (valid)                run (toggle)
//!   stopped ---------------> running ----------------> stopped
//!      |                                                  ^
//!      |  run (invalid)              run (toggle)         |
//!      +---------------> errored -------------------------+
//!
//!   running | errored --(structural edit)--> stopped
//! ```
//!
//! The topology is only checked on an explicit run request. Stopping never
//! re-validates, and there is no background tick.

mod machine;

pub use machine::Simulation;

use std::fmt;

/// State of the run/stop control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationState {
    /// Editing; initial state
    #[default]
    Stopped,
    /// Topology validated, wires animated
    Running,
    /// Run requested but the topology was rejected
    Errored,
}

impl SimulationState {
    pub fn is_running(&self) -> bool {
        matches!(self, SimulationState::Running)
    }

    /// Label for the run button in this state.
    pub fn action_label(&self) -> &'static str {
        match self {
            SimulationState::Stopped => "Run",
            SimulationState::Running | SimulationState::Errored => "Stop",
        }
    }
}

impl fmt::Display for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimulationState::Stopped => "stopped",
            SimulationState::Running => "running",
            SimulationState::Errored => "errored",
        };
        f.write_str(name)
    }
}
