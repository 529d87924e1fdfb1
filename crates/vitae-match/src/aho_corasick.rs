//! Aho-Corasick multi-pattern exact matching.
//!
//! One trie is built over all keywords; the text is scanned exactly once,
//! so the scanning cost is independent of the number of keywords. Nodes
//! live in an arena and refer to each other by index — failure links are
//! plain `usize` handles, never back-pointers.
//!
//! Output sets are merged along failure links at construction time, so the
//! scan only has to emit the visited node's own (already merged) outputs.

use std::collections::{HashMap, VecDeque};

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, usize>,
    /// Index of the node spelling the longest proper suffix of this
    /// node's path that is also a trie prefix. Root links to itself.
    failure: usize,
    /// Keyword indices ending at this node, plus everything inherited
    /// through the failure chain.
    output: Vec<usize>,
}

/// Automaton over a fixed keyword set.
#[derive(Debug)]
pub struct Automaton {
    nodes: Vec<Node>,
    keyword_count: usize,
}

impl Automaton {
    /// Build the trie and failure links for the given keywords.
    ///
    /// Empty keywords are excluded from the trie (they contribute zero
    /// matches) but still own their index in the count vector.
    pub fn build(keywords: &[String]) -> Self {
        let mut nodes = vec![Node::default()];

        for (idx, keyword) in keywords.iter().enumerate() {
            if keyword.is_empty() {
                continue;
            }
            let mut node = ROOT;
            for c in keyword.chars() {
                node = match nodes[node].children.get(&c).copied() {
                    Some(next) => next,
                    None => {
                        nodes.push(Node::default());
                        let next = nodes.len() - 1;
                        nodes[node].children.insert(c, next);
                        next
                    }
                };
            }
            nodes[node].output.push(idx);
        }

        let mut automaton = Self {
            nodes,
            keyword_count: keywords.len(),
        };
        automaton.build_failure_links();
        automaton
    }

    /// Breadth-first failure-link construction. Parents are finalized
    /// before their children, so a child can inherit its failure target's
    /// already-merged output set.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        let root_children: Vec<usize> = self.nodes[ROOT].children.values().copied().collect();
        for child in root_children {
            self.nodes[child].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let children: Vec<(char, usize)> = self.nodes[current]
                .children
                .iter()
                .map(|(&c, &n)| (c, n))
                .collect();

            for (c, child) in children {
                queue.push_back(child);

                let mut failure = self.nodes[current].failure;
                let target = loop {
                    if let Some(&next) = self.nodes[failure].children.get(&c) {
                        break next;
                    }
                    if failure == ROOT {
                        break ROOT;
                    }
                    failure = self.nodes[failure].failure;
                };

                self.nodes[child].failure = target;

                let inherited = self.nodes[target].output.clone();
                self.nodes[child].output.extend(inherited);
            }
        }
    }

    /// Scan the text once and count matches per keyword index.
    pub fn count_matches(&self, text: &str) -> Vec<u32> {
        let mut counts = vec![0u32; self.keyword_count];
        let mut state = ROOT;

        for c in text.chars() {
            // Chase the failure chain until a transition exists; the text
            // cursor never moves backwards.
            while state != ROOT && !self.nodes[state].children.contains_key(&c) {
                state = self.nodes[state].failure;
            }

            match self.nodes[state].children.get(&c) {
                Some(&next) => {
                    state = next;
                    for &idx in &self.nodes[state].output {
                        counts[idx] += 1;
                    }
                }
                None => state = ROOT,
            }
        }

        counts
    }
}

/// Count occurrences of each keyword in the text.
///
/// Builds a fresh automaton per call; construction is O(total keyword
/// length). Text and keywords are expected to be pre-lowercased by the
/// caller.
pub fn match_counts(text: &str, keywords: &[String]) -> Vec<u32> {
    if keywords.is_empty() {
        return Vec::new();
    }
    Automaton::build(keywords).count_matches(text)
}
