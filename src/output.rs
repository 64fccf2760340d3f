use serde::Serialize;

use crate::context::{ORCHESTRATION_CONTEXT, SESSION_START_EVENT};

/// The output returned to the host on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: SessionStartOutput,
}

/// SessionStart-specific output carrying the injected context.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartOutput {
    pub hook_event_name: &'static str,
    pub additional_context: &'static str,
}

impl HookOutput {
    /// The orchestration banner envelope. Identical on every invocation.
    pub fn session_start() -> Self {
        Self {
            hook_specific_output: SessionStartOutput {
                hook_event_name: SESSION_START_EVENT,
                additional_context: ORCHESTRATION_CONTEXT,
            },
        }
    }
}
