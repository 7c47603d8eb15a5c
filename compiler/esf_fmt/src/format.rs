//! The parenthesis spacing pass over a whole document.

use esf_ir::{NodeArena, NodeId, TokenList};
use tracing::debug;

use crate::config::FormatConfig;
use crate::rules::add_space_inside;
use crate::whitespace::SpacingEdits;

/// Counters from one [`format_tokens`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatStats {
    /// Nodes reachable from the root.
    pub nodes_visited: usize,
    /// Nodes whose wrapping parentheses received directives.
    pub pairs_found: usize,
    /// Whitespace tokens inserted, removed, or rewritten.
    pub tokens_changed: usize,
}

impl FormatStats {
    /// Whether the pass changed the token stream.
    #[inline]
    pub fn changed(&self) -> bool {
        self.tokens_changed > 0
    }
}

/// Apply expression parenthesis spacing to every node under `root`.
///
/// Directives are collected over the unmodified stream first, then applied
/// in visit order, so locating pairs never observes a half-edited stream.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = nodes.len()))]
pub fn format_tokens(
    tokens: &mut TokenList,
    nodes: &NodeArena,
    root: NodeId,
    config: &FormatConfig,
) -> FormatStats {
    let mut edits = SpacingEdits::new();
    let mut stats = FormatStats::default();
    for node in nodes.preorder(root) {
        stats.nodes_visited += 1;
        if add_space_inside(tokens, nodes, node, &mut edits) {
            stats.pairs_found += 1;
        }
    }
    stats.tokens_changed = edits.apply(tokens, &config.whitespace);
    debug!(
        visited = stats.nodes_visited,
        pairs = stats.pairs_found,
        changed = stats.tokens_changed,
        "formatted"
    );
    stats
}
