// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! General-case matcher: a byte trie with priority-aware lookup.
//!
//! At each position the trie is walked as far as the input allows, and the
//! terminal with the lowest priority seen on that walk wins. This is not
//! longest-match: an earlier short rule beats a later long one.
//!
//! A zero-length rule is handled outside the trie. It fires at a position
//! whenever no non-empty rule there is preferred over it, and firing does
//! not consume input, so a less preferred non-empty match at the same
//! position still applies afterwards.

use crate::emit::{Emit, Unit};
use crate::table::{PatternTable, Rule};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug)]
struct Node {
    /// Outgoing edges sorted by byte.
    edges: Vec<(u8, NodeId)>,
    /// Index into `TrieMatcher::rules` of the rule ending here.
    terminal: Option<usize>,
    /// Lowest priority of any terminal at or below this node.
    min_priority: usize,
}

impl Node {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            terminal: None,
            min_priority: usize::MAX,
        }
    }

    fn child(&self, byte: u8) -> Option<NodeId> {
        self.edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.edges[i].1)
    }
}

/// Trie over every non-empty rule, plus the optional zero-length rule.
pub struct TrieMatcher {
    nodes: Vec<Node>,
    rules: Vec<Rule>,
    empty: Option<Rule>,
    /// Bytes that begin at least one non-empty rule.
    starts: [bool; 256],
}

impl TrieMatcher {
    pub fn new(table: &PatternTable) -> Self {
        let mut trie = Self {
            nodes: vec![Node::new()],
            rules: Vec::with_capacity(table.rules().len()),
            empty: table.empty_rule().cloned(),
            starts: [false; 256],
        };
        for rule in table.rules() {
            trie.insert(rule.clone());
        }
        tracing::debug!(
            nodes = trie.nodes.len(),
            rules = trie.rules.len(),
            "built trie"
        );
        trie
    }

    /// Insert a non-empty rule. An existing terminal is never replaced.
    fn insert(&mut self, rule: Rule) {
        let bytes = rule.old().as_bytes();
        let Some(&first) = bytes.first() else {
            return;
        };
        self.starts[first as usize] = true;

        let priority = rule.priority();
        let mut node = ROOT;
        for &byte in bytes {
            self.nodes[node.0].min_priority = self.nodes[node.0].min_priority.min(priority);
            node = match self.nodes[node.0].child(byte) {
                Some(next) => next,
                None => self.add_child(node, byte),
            };
        }

        let leaf = &mut self.nodes[node.0];
        leaf.min_priority = leaf.min_priority.min(priority);
        if leaf.terminal.is_none() {
            leaf.terminal = Some(self.rules.len());
            self.rules.push(rule);
        }
    }

    fn add_child(&mut self, parent: NodeId, byte: u8) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new());
        let edges = &mut self.nodes[parent.0].edges;
        let at = edges.partition_point(|&(b, _)| b < byte);
        edges.insert(at, (byte, id));
        id
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The preferred non-empty rule whose `old` text starts at `pos`.
    ///
    /// Walks until the input stops matching an edge, keeping the
    /// lowest-priority terminal passed. The walk also stops once no node
    /// below can hold a better terminal than the one already found.
    pub fn best_match_at(&self, input: &[u8], pos: usize) -> Option<&Rule> {
        let mut best: Option<&Rule> = None;
        let mut node = &self.nodes[ROOT.0];

        for &byte in input.get(pos..).unwrap_or_default() {
            let Some(next) = node.child(byte) else {
                break;
            };
            node = &self.nodes[next.0];
            if best.is_some_and(|b| b.priority() < node.min_priority) {
                break;
            }
            if let Some(index) = node.terminal {
                let rule = &self.rules[index];
                if best.is_none_or(|b| rule.priority() < b.priority()) {
                    best = Some(rule);
                }
            }
        }
        best
    }

    pub(crate) fn scan<E: Emit>(
        &self,
        input: &[u8],
        unit: Unit,
        out: &mut E,
    ) -> Result<(), E::Error> {
        let len = input.len();
        let mut pos = 0;
        // Start of the pending run of copied input.
        let mut last = 0;

        while pos <= len {
            let best = match input.get(pos) {
                Some(&byte) if self.starts[byte as usize] => self.best_match_at(input, pos),
                _ => None,
            };

            // Independent of the non-empty check below: both may fire here.
            if let Some(empty) = &self.empty {
                if best.is_none_or(|rule| empty.priority() <= rule.priority()) {
                    out.emit(&input[last..pos])?;
                    out.emit(empty.replacement().as_bytes())?;
                    last = pos;
                }
            }

            match best {
                Some(rule) => {
                    out.emit(&input[last..pos])?;
                    out.emit(rule.replacement().as_bytes())?;
                    pos += rule.old().len();
                    last = pos;
                }
                None if pos < len => pos += unit.width(input, pos),
                None => break,
            }
        }

        out.emit(&input[last..])
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
