//! Verbose tracing toggles.
//!
//! Each flag enables extra `debug!` events for one category. The flags are
//! passed to the components that emit them when those are constructed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TraceFlags {
    /// Every node materialized by the token builder
    pub node_created: bool,
    /// Every token line accepted by the token reader
    pub token_line: bool,
    /// Comment and blank lines skipped by the token reader
    pub ignoring_line: bool,
    /// Every line of user input
    pub user_input: bool,
    /// Every node visited while playing
    pub inspecting_node: bool,
    /// Leaves flipped into questions
    pub flipping: bool,
}

impl TraceFlags {
    /// All categories enabled.
    pub fn all() -> Self {
        Self {
            node_created: true,
            token_line: true,
            ignoring_line: true,
            user_input: true,
            inspecting_node: true,
            flipping: true,
        }
    }

    pub fn any(&self) -> bool {
        self.node_created
            || self.token_line
            || self.ignoring_line
            || self.user_input
            || self.inspecting_node
            || self.flipping
    }
}
