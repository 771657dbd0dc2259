use std::collections::{HashMap, HashSet, VecDeque};

use t2s_fragment::TreeFragment;
use t2s_grammar::GrammarTrie;
use t2s_hypergraph::{Hypergraph, NodeId};

use crate::error::ComposeError;
use crate::state::{NodeRef, ParserState, TransducerState};

/// The raw result of composition, before finalization: the hypergraph
/// as built, and the node id for the goal task if one was ever
/// interned (i.e. if the queue ever completed a derivation covering
/// the whole input tree).
pub struct RawComposition {
    pub hypergraph: Hypergraph,
    pub goal_task: TransducerState,
    pub goal_node: Option<NodeId>,
}

fn enqueue<'g>(queue: &mut VecDeque<ParserState<'g>>, seen: &mut HashSet<ParserState<'g>>, state: ParserState<'g>) {
    if seen.insert(state.clone()) {
        queue.push_back(state);
    }
}

fn intern_node(
    hg: &mut Hypergraph,
    x2hg: &mut HashMap<TransducerState, NodeId>,
    input: &TreeFragment,
    task: TransducerState,
) -> NodeId {
    if let Some(&id) = x2hg.get(&task) {
        return id;
    }
    let category = input.nodes[task.input_node_idx].lhs;
    let label = -(category as i64);
    let id = hg.add_node(label, task.stable_hash());
    x2hg.insert(task, id);
    id
}

/// Runs the BFS composition of `input` against `grammars`, producing
/// the raw (unfinalized) hypergraph. Grammar tries must outlive the
/// call; the queue, dedup set, and interning map are all scoped to it.
pub fn compose<'g>(input: &TreeFragment, grammars: &'g [GrammarTrie]) -> Result<RawComposition, ComposeError> {
    let goal_task = TransducerState::new(input.root, 0);

    let mut queue: VecDeque<ParserState<'g>> = VecDeque::new();
    let mut seen: HashSet<ParserState<'g>> = HashSet::new();
    let mut hg = Hypergraph::new();
    let mut x2hg: HashMap<TransducerState, NodeId> = HashMap::new();

    for g in grammars {
        if let Some(root) = g.root_for(0) {
            enqueue(
                &mut queue,
                &mut seen,
                ParserState {
                    in_iter: input.begin(input.root),
                    task: goal_task,
                    future_work: Vec::new(),
                    node: NodeRef(root),
                },
            );
        }
    }

    while let Some(state) = queue.pop_front() {
        if state.in_iter.at_end() {
            let head = intern_node(&mut hg, &mut x2hg, input, state.task);
            let mut tail = Vec::with_capacity(state.future_work.len());
            for &fw in &state.future_work {
                tail.push(intern_node(&mut hg, &mut x2hg, input, fw));
            }

            for rule in state.node.get().rules() {
                if rule.arity != tail.len() {
                    return Err(ComposeError::ArityMismatch {
                        expected: rule.arity,
                        got: tail.len(),
                    });
                }
                hg.add_edge(head, tail.clone(), rule.feature_values.clone());
            }

            for &fw in &state.future_work {
                for g in grammars {
                    if let Some(root) = g.root_for(fw.transducer_state) {
                        enqueue(
                            &mut queue,
                            &mut seen,
                            ParserState {
                                in_iter: input.begin(fw.input_node_idx),
                                task: fw,
                                future_work: Vec::new(),
                                node: NodeRef(root),
                            },
                        );
                    }
                }
            }
            continue;
        }

        let sym = state.in_iter.current(input).expect("not at_end");

        if sym.is_lhs() {
            if let Some(next) = state.node.get().step(sym) {
                let mut in_iter = state.in_iter.clone();
                in_iter.advance(input);
                enqueue(
                    &mut queue,
                    &mut seen,
                    ParserState {
                        in_iter,
                        task: state.task,
                        future_work: state.future_work.clone(),
                        node: NodeRef(next),
                    },
                );
            }
        } else if sym.is_rhs() {
            // A single trie step serves both matches: the grammar
            // side cannot tell, from this one symbol, whether the
            // input subtree will be deferred (variable match) or
            // matched structurally in full (exact match) — both are
            // tried, independently, against the same trie child.
            if let Some(next) = state.node.get().step(sym) {
                let child = state.in_iter.child_node(input);

                let mut deferred = state.in_iter.clone();
                deferred.skip_subtree(input);
                let mut future_work = state.future_work.clone();
                future_work.push(TransducerState::new(child, 0));
                enqueue(
                    &mut queue,
                    &mut seen,
                    ParserState {
                        in_iter: deferred,
                        task: state.task,
                        future_work,
                        node: NodeRef(next),
                    },
                );

                let mut descended = state.in_iter.clone();
                descended.advance(input);
                enqueue(
                    &mut queue,
                    &mut seen,
                    ParserState {
                        in_iter: descended,
                        task: state.task,
                        future_work: state.future_work.clone(),
                        node: NodeRef(next),
                    },
                );
            }
        } else if sym.is_terminal() {
            if let Some(next) = state.node.get().step(sym) {
                let mut in_iter = state.in_iter.clone();
                in_iter.advance(input);
                enqueue(
                    &mut queue,
                    &mut seen,
                    ParserState {
                        in_iter,
                        task: state.task,
                        future_work: state.future_work.clone(),
                        node: NodeRef(next),
                    },
                );
            }
        } else {
            return Err(ComposeError::InternalInvariant(
                "tree-fragment token was neither LHS, RHS, nor terminal".to_string(),
            ));
        }
    }

    let goal_node = x2hg.get(&goal_task).copied();
    Ok(RawComposition {
        hypergraph: hg,
        goal_task,
        goal_node,
    })
}
