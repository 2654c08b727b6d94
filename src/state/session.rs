//! Step session: which step is showing and which phase the form is in

use crate::submission::SubmissionReceipt;

/// Number of steps in the application
pub const TOTAL_STEPS: usize = 5;

/// One screen of the multi-step form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub index: usize,
    pub label: &'static str,
}

/// Static step lookup table, keyed 1..=TOTAL_STEPS
pub const STEPS: [StepDefinition; TOTAL_STEPS] = [
    StepDefinition {
        index: 1,
        label: "Basic Information",
    },
    StepDefinition {
        index: 2,
        label: "Business Information",
    },
    StepDefinition {
        index: 3,
        label: "Owner Information",
    },
    StepDefinition {
        index: 4,
        label: "Acknowledge & Agree",
    },
    StepDefinition {
        index: 5,
        label: "Bank Activity",
    },
];

/// Look up a step by its 1-based index
pub fn step_definition(index: usize) -> Option<&'static StepDefinition> {
    STEPS.iter().find(|s| s.index == index)
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// A step is showing and editable
    #[default]
    Editing,
    /// The submission collaborator is working
    Processing,
    /// Accepted; nothing further happens
    Submitted(SubmissionReceipt),
}

/// Current step and phase.
///
/// Handlers take a session by value and hand back the next one; the step is
/// always within `1..=total_steps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    current_step: usize,
    total_steps: usize,
    pub phase: Phase,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            total_steps: TOTAL_STEPS,
            phase: Phase::Editing,
        }
    }

    /// Session positioned on `step`, clamped into range
    #[allow(dead_code)]
    pub fn at_step(step: usize) -> Self {
        Self {
            current_step: step.clamp(1, TOTAL_STEPS),
            ..Self::new()
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    /// Next step, saturating at the last one
    pub fn advanced(self) -> Self {
        Self {
            current_step: (self.current_step + 1).min(self.total_steps),
            ..self
        }
    }

    /// Previous step, saturating at the first one
    pub fn retreated(self) -> Self {
        Self {
            current_step: self.current_step.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn with_phase(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }

    /// Progress through the form as a whole percentage
    pub fn progress_percent(&self) -> u16 {
        (self.current_step * 100 / self.total_steps) as u16
    }

    pub fn step_label(&self) -> &'static str {
        step_definition(self.current_step)
            .map(|s| s.label)
            .unwrap_or("")
    }

    /// "Step n of N"
    pub fn indicator(&self) -> String {
        format!("Step {} of {}", self.current_step, self.total_steps)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
