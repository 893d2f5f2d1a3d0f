//! Scenario state and runtime/server initialization for the comment
//! extraction BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use wiremock::MockServer;
use ytcomments::{BatchReport, ExtractError};

use super::runtime::SharedRuntime;

/// Scenario state for comment extraction tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ExtractionState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) output_dir: Slot<TempDir>,
    pub(crate) report: Slot<BatchReport>,
}

/// Ensures the runtime and server are initialized in `ExtractionState`.
pub(crate) fn ensure_runtime_and_server(
    state: &ExtractionState,
) -> Result<SharedRuntime, ExtractError> {
    super::runtime::ensure_runtime_and_server(&state.runtime, &state.server).map_err(|error| {
        ExtractError::Api {
            message: format!("failed to create Tokio runtime: {error}"),
        }
    })
}
