//! Dependency graph analysis over a loaded ticket set.
//!
//! Built per call — there is no persistent index. The graph tolerates
//! cycles and dangling edges in the underlying files: depth traversal
//! carries the set of ids on the active path and treats a back-edge as
//! depth 0, and the tree renderer keeps a separate globally-visited
//! set so no ticket is printed twice.
//!
//! Ready and blocked are deliberately not complements: an inactive
//! ticket is neither, a dependency-free ticket is ready and never
//! blocked, and an unresolvable dependency blocks but never readies.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use crate::model::{Status, Ticket};

/// Per-analysis dependency graph with memoized subtree depths.
pub struct DepGraph<'a> {
    tickets: &'a [Ticket],
    index: HashMap<&'a str, usize>,
    depths: Vec<usize>,
}

impl<'a> DepGraph<'a> {
    /// Build the id lookup and compute every subtree depth up front.
    #[must_use]
    pub fn new(tickets: &'a [Ticket]) -> Self {
        let index: HashMap<&str, usize> = tickets
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let mut depths = vec![0; tickets.len()];
        let mut finalized = vec![false; tickets.len()];
        let mut path = Vec::new();
        for idx in 0..tickets.len() {
            depth_of(tickets, &index, idx, &mut depths, &mut finalized, &mut path);
        }

        Self {
            tickets,
            index,
            depths,
        }
    }

    /// Look up a ticket by exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Ticket> {
        self.index.get(id).map(|&i| &self.tickets[i])
    }

    /// Longest resolvable dependency chain below `id`; 0 for unknown ids.
    #[must_use]
    pub fn subtree_depth(&self, id: &str) -> usize {
        self.index.get(id).map_or(0, |&i| self.depths[i])
    }

    /// A ticket is ready when it is active and every dependency
    /// resolves to a closed ticket. An unresolvable dependency blocks,
    /// never unblocks; zero dependencies is ready.
    #[must_use]
    pub fn is_ready(&self, ticket: &Ticket) -> bool {
        if !ticket.status.is_active() {
            return false;
        }
        ticket.deps.iter().all(|dep| self.dep_satisfied(dep))
    }

    /// A ticket is blocked when it is active, has at least one
    /// dependency, and at least one of them is unresolvable or not yet
    /// closed.
    #[must_use]
    pub fn is_blocked(&self, ticket: &Ticket) -> bool {
        if !ticket.status.is_active() || ticket.deps.is_empty() {
            return false;
        }
        ticket.deps.iter().any(|dep| !self.dep_satisfied(dep))
    }

    /// Dependencies keeping `ticket` from being ready, in stored order.
    #[must_use]
    pub fn unmet_deps(&self, ticket: &'a Ticket) -> Vec<&'a str> {
        ticket
            .deps
            .iter()
            .filter(|dep| !self.dep_satisfied(dep))
            .map(String::as_str)
            .collect()
    }

    /// Render the dependency tree rooted at `root_id`.
    ///
    /// Every ticket appears at most once per render; a repeat anywhere
    /// in the tree is skipped rather than duplicated. Children are
    /// ordered resolvable-first, deeper subtrees first, ties by
    /// ascending id; unresolvable deps sort last and are never
    /// rendered. In full mode the positionally last child carries the
    /// terminal connector; in compact mode the last resolvable one
    /// does. An unknown root renders nothing.
    #[must_use]
    pub fn render_tree(&self, root_id: &str, full: bool) -> String {
        let mut out = String::new();
        if let Some(&root) = self.index.get(root_id) {
            let mut rendered = HashSet::new();
            self.render_node(root, "", true, true, full, &mut rendered, &mut out);
        }
        out
    }

    fn render_node(
        &self,
        idx: usize,
        prefix: &str,
        is_last: bool,
        is_root: bool,
        full: bool,
        rendered: &mut HashSet<usize>,
        out: &mut String,
    ) {
        if !rendered.insert(idx) {
            return;
        }
        let ticket = &self.tickets[idx];

        if is_root {
            let _ = writeln!(out, "{} [{}] {}", ticket.id, ticket.status, ticket.title);
        } else {
            let connector = if is_last { "└── " } else { "├── " };
            let _ = writeln!(
                out,
                "{prefix}{connector}{} [{}] {}",
                ticket.id, ticket.status, ticket.title
            );
        }

        let children = self.sorted_deps(ticket);
        if children.is_empty() {
            return;
        }

        let child_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        for (pos, dep) in children.iter().enumerate() {
            let Some(&dep_idx) = self.index.get(dep.as_str()) else {
                continue;
            };
            let last = if full {
                pos == children.len() - 1
            } else {
                children[pos + 1..]
                    .iter()
                    .all(|d| !self.index.contains_key(d.as_str()))
            };
            self.render_node(dep_idx, &child_prefix, last, false, full, rendered, out);
        }
    }

    /// Dependency ids ordered for display.
    fn sorted_deps(&self, ticket: &'a Ticket) -> Vec<&'a String> {
        let mut deps: Vec<&String> = ticket.deps.iter().collect();
        deps.sort_by(|a, b| {
            match (self.index.get(a.as_str()), self.index.get(b.as_str())) {
                (Some(&ia), Some(&ib)) => self.depths[ib]
                    .cmp(&self.depths[ia])
                    .then_with(|| a.cmp(b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        deps
    }

    fn dep_satisfied(&self, dep: &str) -> bool {
        self.get(dep).is_some_and(|d| d.status == Status::Closed)
    }
}

/// Longest dependency chain from `idx`, memoized once finalized.
/// Revisiting an id already on the active path contributes 0 for that
/// edge instead of recursing.
fn depth_of(
    tickets: &[Ticket],
    index: &HashMap<&str, usize>,
    idx: usize,
    depths: &mut [usize],
    finalized: &mut [bool],
    path: &mut Vec<usize>,
) -> usize {
    if path.contains(&idx) {
        return 0;
    }
    if finalized[idx] {
        return depths[idx];
    }

    path.push(idx);
    let mut max = 0;
    for dep in &tickets[idx].deps {
        if let Some(&dep_idx) = index.get(dep.as_str()) {
            max = max.max(depth_of(tickets, index, dep_idx, depths, finalized, path) + 1);
        }
    }
    path.pop();

    depths[idx] = max;
    finalized[idx] = true;
    max
}
