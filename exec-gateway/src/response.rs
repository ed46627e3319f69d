//! Reconciliation of the two response shapes the provider is known to
//! return. The marketplace binding reports the outcome at the root or under
//! a flat `result` object, while the direct binding nests it under
//! `post.properties.result`. Each field is resolved independently through
//! its own precedence list, so a mixed shape still yields a complete
//! outcome and a third shape is one more path entry, not a new branch.

use serde_json::Value;

use crate::types::ExecutionResult;

const STDOUT_PATHS: [&[&str]; 3] = [
    &["stdout"],
    &["result", "stdout"],
    &["post", "properties", "result", "stdout"],
];

// The flat shape reports runtime faults in a root `exception` field, which
// doubles as the stderr channel when no dedicated stderr is present.
const STDERR_PATHS: [&[&str]; 4] = [
    &["stderr"],
    &["result", "stderr"],
    &["exception"],
    &["post", "properties", "result", "stderr"],
];

const EXCEPTION_PATHS: [&[&str]; 2] = [
    &["exception"],
    &["post", "properties", "result", "exception"],
];

const EXECUTION_TIME_PATHS: [&[&str]; 3] = [
    &["executionTime"],
    &["result", "executionTime"],
    &["post", "properties", "result", "executionTime"],
];

impl ExecutionResult {
    /// Build the canonical outcome from a decoded provider response. Each
    /// field takes the first defined value along its precedence list; fields
    /// that are absent, null, or of the wrong type at every location fall
    /// back to their defaults.
    pub(crate) fn from_provider(body: &Value) -> Self {
        Self {
            stdout: first_string(body, &STDOUT_PATHS).unwrap_or_default(),
            stderr: first_string(body, &STDERR_PATHS).unwrap_or_default(),
            exception: first_string(body, &EXCEPTION_PATHS),
            execution_time: first_u64(body, &EXECUTION_TIME_PATHS).unwrap_or_default(),
        }
    }
}

fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |value, segment| value.get(segment))
}

fn first_string(root: &Value, paths: &[&[&str]]) -> Option<String> {
    paths
        .iter()
        .find_map(|path| lookup(root, path)?.as_str().map(str::to_string))
}

fn first_u64(root: &Value, paths: &[&[&str]]) -> Option<u64> {
    paths.iter().find_map(|path| lookup(root, path)?.as_u64())
}
