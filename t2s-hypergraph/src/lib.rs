use std::collections::{HashMap, HashSet, VecDeque};

pub type NodeId = usize;
pub type EdgeId = usize;

/// A hypergraph node, labelled by the (negated) category it covers.
/// `node_hash` gives the node a stable identity independent of arena
/// position, carried over from the `TransducerState` it was interned
/// from.
#[derive(Debug, Clone)]
pub struct HgNode {
    pub label: i64,
    pub node_hash: u64,
    pub incoming: Vec<EdgeId>,
}

/// A hyperedge: one rule application, with one tail node per rule
/// variable (in rule order) and a sparse feature vector.
#[derive(Debug, Clone)]
pub struct HgEdge {
    pub head: NodeId,
    pub tail: Vec<NodeId>,
    pub features: Vec<(u32, f64)>,
    pub weight: f64,
}

/// A weighted, directed acyclic hypergraph: the minimal API the
/// composition engine needs (add node, add edge with tail list,
/// topo-sort from a goal, prune unreachable, reweight) and nothing
/// more — scoring models, rescoring, and serialisation live outside
/// this crate.
#[derive(Debug, Clone, Default)]
pub struct Hypergraph {
    nodes: Vec<HgNode>,
    edges: Vec<HgEdge>,
}

impl Hypergraph {
    pub fn new() -> Self {
        Hypergraph {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, label: i64, node_hash: u64) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(HgNode {
            label,
            node_hash,
            incoming: Vec::new(),
        });
        id
    }

    /// Adds an edge with the given tail (one entry per rule variable)
    /// and feature vector, connecting it to `head`.
    pub fn add_edge(&mut self, head: NodeId, tail: Vec<NodeId>, features: Vec<(u32, f64)>) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(HgEdge {
            head,
            tail,
            features,
            weight: 0.0,
        });
        self.nodes[head].incoming.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &HgNode {
        &self.nodes[id]
    }

    pub fn edge(&self, id: EdgeId) -> &HgEdge {
        &self.edges[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges_into(&self, node: NodeId) -> &[EdgeId] {
        &self.nodes[node].incoming
    }

    /// Sets every edge's `weight` to the dot product of its feature
    /// vector with `weights`. Features absent from `weights` score 0.
    pub fn reweight(&mut self, weights: &HashMap<u32, f64>) {
        for edge in &mut self.edges {
            edge.weight = edge
                .features
                .iter()
                .map(|(fid, v)| v * weights.get(fid).copied().unwrap_or(0.0))
                .sum();
        }
    }

    /// Topologically sorts the subgraph reachable (via edge tails)
    /// from `goal`, parents before children is not meaningful for a
    /// hypergraph goal-rooted walk — we return nodes in an order where
    /// every tail node of a reachable edge appears before that edge's
    /// head is required to be "done", i.e. a bottom-up order suitable
    /// for derivability propagation. Returns `None` if `goal` has no
    /// incoming edges at all.
    pub fn topo_sort_from(&self, goal: NodeId) -> Option<Vec<NodeId>> {
        if goal >= self.nodes.len() || self.nodes[goal].incoming.is_empty() {
            return None;
        }
        let mut reachable = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(goal);
        reachable.insert(goal);
        while let Some(n) = queue.pop_front() {
            order.push(n);
            for &e in &self.nodes[n].incoming {
                for &t in &self.edges[e].tail {
                    if reachable.insert(t) {
                        queue.push_back(t);
                    }
                }
            }
        }
        order.reverse();
        Some(order)
    }

    /// Removes edges that can never derive anything: an edge is kept
    /// only if every tail node is itself derivable (has at least one
    /// surviving edge, or is a leaf with an edge of empty tail).
    /// Returns `false` (and leaves the hypergraph with no edges into
    /// `goal`) if the goal ends up undeliverable.
    pub fn prune_unreachable(&mut self, goal: NodeId) -> bool {
        let Some(reachable_order) = self.topo_sort_from(goal) else {
            return false;
        };
        let reachable: HashSet<NodeId> = reachable_order.iter().copied().collect();

        let mut derivable: HashSet<NodeId> = HashSet::new();
        loop {
            let mut changed = false;
            for &n in &reachable_order {
                if derivable.contains(&n) {
                    continue;
                }
                let has_derivable_edge = self.nodes[n].incoming.iter().any(|&e| {
                    self.edges[e]
                        .tail
                        .iter()
                        .all(|t| derivable.contains(t))
                });
                if has_derivable_edge {
                    derivable.insert(n);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        for node in &mut self.nodes {
            node.incoming
                .retain(|&e| self.edges[e].tail.iter().all(|t| derivable.contains(t)));
        }
        self.edges = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tail.iter().all(|t| derivable.contains(t)) && reachable.contains(&e.head))
            .map(|(_, e)| e.clone())
            .collect();
        // incoming indices were invalidated by the filter above; rebuild them.
        for node in &mut self.nodes {
            node.incoming.clear();
        }
        for (id, edge) in self.edges.iter().enumerate() {
            self.nodes[edge.head].incoming.push(id);
        }

        derivable.contains(&goal) && !self.nodes[goal].incoming.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reweight_is_feature_dot_product() {
        let mut hg = Hypergraph::new();
        let a = hg.add_node(-1, 0);
        let b = hg.add_node(-2, 1);
        hg.add_edge(a, vec![b], vec![(0, 2.0), (1, 3.0)]);
        hg.add_edge(b, vec![], vec![(0, 1.0)]);
        let mut weights = HashMap::new();
        weights.insert(0, 0.5);
        weights.insert(1, 1.0);
        hg.reweight(&weights);
        assert_eq!(hg.edge(0).weight, 2.0 * 0.5 + 3.0 * 1.0);
        assert_eq!(hg.edge(1).weight, 0.5);
    }

    #[test]
    fn prune_removes_edges_with_undeliverable_tails() {
        let mut hg = Hypergraph::new();
        let goal = hg.add_node(-1, 0);
        let dead = hg.add_node(-2, 1);
        // edge into goal that depends on `dead`, which has no edges at all
        hg.add_edge(goal, vec![dead], vec![]);
        assert!(!hg.prune_unreachable(goal));
        assert_eq!(hg.edges_into(goal).len(), 0);
    }

    #[test]
    fn prune_keeps_edges_with_derivable_tails() {
        let mut hg = Hypergraph::new();
        let goal = hg.add_node(-1, 0);
        let leaf = hg.add_node(-2, 1);
        hg.add_edge(leaf, vec![], vec![]);
        hg.add_edge(goal, vec![leaf], vec![]);
        assert!(hg.prune_unreachable(goal));
        assert_eq!(hg.edges_into(goal).len(), 1);
    }

    #[test]
    fn topo_sort_missing_goal_is_none() {
        let mut hg = Hypergraph::new();
        let n = hg.add_node(-1, 0);
        assert!(hg.topo_sort_from(n).is_none());
    }
}
