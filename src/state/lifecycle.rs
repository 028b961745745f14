//! Startup lifecycle of the external game module.
//!
//! `NotStarted -> Initializing -> {Ready, FailedBenign, FailedFatal}`.
//! There is no retry and no teardown; every phase after `Initializing` is
//! terminal.

use std::fmt;

use crate::module::{FailureKind, InitOutcome};

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootPhase {
    #[default]
    NotStarted,
    Initializing,
    Ready,
    /// The module rejected with its control-flow sentinel; treated as success.
    FailedBenign,
    FailedFatal,
}

impl BootPhase {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Ready | Self::FailedBenign | Self::FailedFatal)
    }

    /// Whether the shell considers the module started successfully.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ready | Self::FailedBenign)
    }
}

impl From<InitOutcome> for BootPhase {
    fn from(outcome: InitOutcome) -> Self {
        match outcome {
            InitOutcome::Ready => Self::Ready,
            InitOutcome::Failed(FailureKind::Benign) => Self::FailedBenign,
            InitOutcome::Failed(FailureKind::Fatal) => Self::FailedFatal,
        }
    }
}

impl fmt::Display for BootPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::FailedBenign => "failed (benign)",
            Self::FailedFatal => "failed (fatal)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("game module already started ({phase})")]
    AlreadyStarted { phase: BootPhase },
}

#[derive(Clone, Debug, Default)]
pub struct ModuleLifecycle {
    phase: BootPhase,
}

impl ModuleLifecycle {
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Move to `Initializing`. Accepted exactly once.
    pub fn begin(&mut self) -> Result<(), LifecycleError> {
        if self.phase != BootPhase::NotStarted {
            return Err(LifecycleError::AlreadyStarted { phase: self.phase });
        }
        self.phase = BootPhase::Initializing;
        log::debug!("game module: {}", self.phase);
        Ok(())
    }

    /// Record the initializer's outcome and return the terminal phase.
    ///
    /// Fatal outcomes are left for the caller to report with the failure text.
    pub fn settle(&mut self, outcome: InitOutcome) -> BootPhase {
        if self.phase != BootPhase::Initializing {
            log::warn!("game module settled while {}", self.phase);
        }
        self.phase = BootPhase::from(outcome);
        if self.phase.is_success() {
            log::info!("game module: {}", self.phase);
        }
        self.phase
    }
}
