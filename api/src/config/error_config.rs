//! Process-wide environment used when rendering internal errors
//!
//! `ResponseError::error_response` has no access to application state, so the
//! environment that decides whether internal detail is shown lives here.

use once_cell::sync::OnceCell;
use sf_shared::config::Environment;

static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Fix the environment for the lifetime of the process
///
/// Returns `false` when it was already set; the first value wins.
pub fn init_environment(environment: Environment) -> bool {
    ENVIRONMENT.set(environment).is_ok()
}

/// The configured environment, resolved from the process environment on first use
pub fn current_environment() -> Environment {
    *ENVIRONMENT.get_or_init(Environment::from_env)
}
