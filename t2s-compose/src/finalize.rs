use std::collections::HashMap;

use t2s_hypergraph::{Hypergraph, NodeId};

use crate::engine::RawComposition;
use crate::error::ComposeError;

/// The finalized translation forest: a pruned, reweighted hypergraph
/// together with its goal node and a bottom-up node order suitable for
/// reading derivations out.
pub struct Forest {
    pub hypergraph: Hypergraph,
    pub goal: NodeId,
    pub topo_order: Vec<NodeId>,
}

/// Looks up the goal node, reweights every edge against `weights`,
/// and prunes edges that can never derive anything. Fails with
/// `NoDerivation` if the goal was never interned, or if pruning leaves
/// it with no surviving edges.
pub fn finalize(raw: RawComposition, weights: &HashMap<u32, f64>) -> Result<Forest, ComposeError> {
    let goal = raw.goal_node.ok_or(ComposeError::NoDerivation)?;
    let mut hg = raw.hypergraph;
    hg.reweight(weights);
    if !hg.prune_unreachable(goal) {
        return Err(ComposeError::NoDerivation);
    }
    let topo_order = hg
        .topo_sort_from(goal)
        .expect("goal retains incoming edges after a successful prune");
    Ok(Forest {
        hypergraph: hg,
        goal,
        topo_order,
    })
}
