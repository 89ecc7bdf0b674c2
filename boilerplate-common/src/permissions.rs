//! Permission dependency graph
//!
//! Each permission checkbox may declare the permissions it requires. The
//! graph keeps those forward edges together with their inverse so a click can
//! be answered without walking the DOM:
//!
//! - checking a permission pulls in everything it requires, transitively
//! - unchecking a permission that a checked permission still requires is refused
//!
//! The graph never stores checked state. Callers pass a lookup and apply the
//! returned [`Propagation`] themselves.

use std::collections::{HashMap, HashSet};

use crate::{Error, Result};

/// Separator used when writing id lists back into `data-required-by`
pub const ID_LIST_SEPARATOR: &str = ", ";

/// Parse a comma separated id list such as `"view_users, edit_users"`.
///
/// Whitespace is dropped, empty entries are skipped and duplicates keep
/// their first position.
pub fn parse_id_list(value: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for raw in value.split(',') {
        let id: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if !id.is_empty() && !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Join ids the way the pages expect them in `data-required-by`
pub fn join_id_list<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(ID_LIST_SEPARATOR)
}

/// What the page has to do after a checkbox changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Propagation {
    /// Nothing to change
    None,
    /// The checkbox was unchecked while these checked permissions still
    /// require it. It has to be checked again.
    Blocked { dependents: Vec<String> },
    /// The checkbox was checked and these permissions must be checked too
    Require { ids: Vec<String> },
}

/// Forward `requires` edges plus the computed `required_by` inverse
#[derive(Debug, Clone, Default)]
pub struct PermissionGraph {
    nodes: Vec<String>,
    requires: HashMap<String, Vec<String>>,
    required_by: HashMap<String, Vec<String>>,
}

impl PermissionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(id, requires)` pairs.
    ///
    /// Later duplicates of an id replace the earlier requirements but keep
    /// the original position.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut graph = Self::new();
        for (id, requires) in nodes {
            graph.insert(id, requires);
        }
        graph.rebuild_inverse();
        graph
    }

    /// Build a graph from `(id, data-requires)` attribute pairs
    pub fn from_attributes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        Self::from_nodes(nodes.into_iter().map(|(id, requires)| {
            let requires = requires.as_deref().map(parse_id_list).unwrap_or_default();
            (id, requires)
        }))
    }

    fn insert(&mut self, id: String, mut requires: Vec<String>) {
        requires.retain(|req| req != &id);
        if !self.requires.contains_key(&id) {
            self.nodes.push(id.clone());
        }
        self.requires.insert(id, requires);
    }

    fn rebuild_inverse(&mut self) {
        self.required_by.clear();
        for id in &self.nodes {
            for req in &self.requires[id] {
                self.required_by
                    .entry(req.clone())
                    .or_default()
                    .push(id.clone());
            }
        }
    }

    /// Add a permission, or replace the requirements of an existing one
    pub fn add_node(&mut self, id: impl Into<String>, requires: Vec<String>) {
        self.insert(id.into(), requires);
        self.rebuild_inverse();
    }

    /// Replace the requirements of an existing permission.
    ///
    /// The inverse edges are rebuilt from scratch afterwards.
    pub fn set_requires(&mut self, id: &str, requires: Vec<String>) -> Result<()> {
        if !self.contains(id) {
            return Err(Error::UnknownPermission(id.to_string()));
        }
        self.insert(id.to_string(), requires);
        self.rebuild_inverse();
        Ok(())
    }

    /// Remove a permission and every edge pointing at it
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.requires.remove(id).is_none() {
            return false;
        }
        self.nodes.retain(|node| node != id);
        for requires in self.requires.values_mut() {
            requires.retain(|req| req != id);
        }
        self.rebuild_inverse();
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.requires.contains_key(id)
    }

    /// Permission ids in insertion order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct requirements of `id`
    pub fn requires(&self, id: &str) -> &[String] {
        self.requires.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Permissions that directly require `id`
    pub fn required_by(&self, id: &str) -> &[String] {
        self.required_by.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(permission, requirement)` edges whose requirement is not a node
    pub fn dangling_edges(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .flat_map(|id| {
                self.requires(id)
                    .iter()
                    .filter(|req| !self.contains(req))
                    .map(move |req| (id.as_str(), req.as_str()))
            })
            .collect()
    }

    /// Every permission reachable from `id` through `requires` edges.
    ///
    /// Depth-first, each id is reported once, `id` itself never. Cycles and
    /// diamonds terminate through the visited set.
    pub fn required_closure(&self, id: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(id);

        let mut closure = Vec::new();
        let mut stack: Vec<&str> = self.requires(id).iter().rev().map(String::as_str).collect();

        while let Some(next) = stack.pop() {
            if !visited.insert(next) {
                continue;
            }
            closure.push(next.to_string());
            stack.extend(self.requires(next).iter().rev().map(String::as_str));
        }

        closure
    }

    /// Decide what follows from `id` being set to `now_checked`.
    ///
    /// `is_checked` reports the current state of the other checkboxes.
    pub fn toggle<F>(&self, id: &str, now_checked: bool, is_checked: F) -> Propagation
    where
        F: Fn(&str) -> bool,
    {
        if now_checked {
            let ids = self.required_closure(id);
            if ids.is_empty() {
                Propagation::None
            } else {
                Propagation::Require { ids }
            }
        } else {
            let dependents: Vec<String> = self
                .required_by(id)
                .iter()
                .filter(|dependent| is_checked(dependent))
                .cloned()
                .collect();
            if dependents.is_empty() {
                Propagation::None
            } else {
                Propagation::Blocked { dependents }
            }
        }
    }

    /// Checked permissions with a known requirement that is not checked.
    ///
    /// Bulk select/reset and role population bypass propagation, so this is
    /// the way to find out whether a selection is consistent.
    pub fn unmet_requirements<F>(&self, is_checked: F) -> Vec<(String, String)>
    where
        F: Fn(&str) -> bool,
    {
        let mut unmet = Vec::new();
        for id in self.nodes.iter().filter(|id| is_checked(id)) {
            for req in self.requires(id) {
                if self.contains(req) && !is_checked(req) {
                    unmet.push((id.clone(), req.clone()));
                }
            }
        }
        unmet
    }
}
