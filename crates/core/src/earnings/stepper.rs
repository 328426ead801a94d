//! Stage progress for the deal stepper

use novaearn_domain::Stage;
use serde::Serialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// How a stage renders relative to the deal's current stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

/// One cell of the stage stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StageStep {
    pub stage: Stage,
    pub state: StepState,
}

/// Mark every stage against `current` by sequence position.
///
/// Callers without an active deal pass [`Stage::Lead`].
pub fn stage_steps(current: Stage) -> Vec<StageStep> {
    let current_index = current.index();
    Stage::SEQUENCE
        .iter()
        .map(|&stage| {
            let state = match stage.index().cmp(&current_index) {
                std::cmp::Ordering::Less => StepState::Complete,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            };
            StageStep { stage, state }
        })
        .collect()
}
