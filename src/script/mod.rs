//! Script Execution Module
//!
//! The capability behind the `run` verb. Disabled unless configured; when
//! enabled, scripts run in a restricted evaluator bounded by [`ScriptLimits`].

pub mod types;
pub mod restricted;

pub use types::{DisabledExecutor, ScriptError, ScriptExecutor, ScriptLimits};
pub use restricted::RestrictedExecutor;
