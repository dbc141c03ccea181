//! Application services - orchestrate use cases.

pub mod setup_plan;
pub mod setup_service;

pub use setup_plan::{SetupPlan, SetupStep, StepAction, StepKind};
pub use setup_service::{SetupReport, SetupService};
