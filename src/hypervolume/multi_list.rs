//! The shared multi-list backing the hypervolume sweep.
//!
//! Several doubly linked circular lists — one per dimension — thread the
//! same set of nodes, so a point can be unlinked from the lower
//! dimensions while staying reachable in the higher ones. Nodes live in
//! a single arena and link to each other by index, with index 0 reserved
//! for the structural sentinel that closes every circle.

use std::cmp::Ordering;

/// One point of the sweep, holding its coordinates and per-dimension
/// link and scratch state.
///
/// The sentinel is the one node without cargo; every comparison predicate
/// involving it returns `false`, so it can never register as dominating
/// or dominated during a sweep.
#[derive(Debug, Clone)]
pub struct HyperNode {
    pub(crate) cargo: Option<Vec<f64>>,
    pub(crate) next: Vec<usize>,
    pub(crate) prev: Vec<usize>,
    /// Highest dimension whose sweep may skip recomputing this node.
    pub(crate) ignore: usize,
    pub(crate) area: Vec<f64>,
    pub(crate) volume: Vec<f64>,
}

impl HyperNode {
    fn new(dimensions: usize, cargo: Option<Vec<f64>>) -> Self {
        Self {
            cargo,
            next: vec![HyperList::SENTINEL; dimensions],
            prev: vec![HyperList::SENTINEL; dimensions],
            ignore: 0,
            area: vec![0.0; dimensions],
            volume: vec![0.0; dimensions],
        }
    }

    /// The node's coordinates, or `None` for the sentinel.
    pub fn cargo(&self) -> Option<&[f64]> {
        self.cargo.as_deref()
    }

    /// Element-wise comparison: true only when `op` holds on *every*
    /// coordinate pair, and always false when either node is the
    /// sentinel.
    fn compare<F: Fn(f64, f64) -> bool>(&self, other: &Self, op: F) -> bool {
        match (&self.cargo, &other.cargo) {
            (Some(a), Some(b)) => a.iter().zip(b.iter()).all(|(&x, &y)| op(x, y)),
            _ => false,
        }
    }

    /// All coordinates equal (false for the sentinel).
    pub fn coords_equal(&self, other: &Self) -> bool {
        self.compare(other, |a, b| a == b)
    }

    /// Pareto dominance in minimization space: no coordinate worse,
    /// at least one strictly better.
    pub fn dominates(&self, other: &Self) -> bool {
        self.compare(other, |a, b| a <= b) && !self.coords_equal(other)
    }

    /// `other` dominates `self`.
    pub fn dominated_by(&self, other: &Self) -> bool {
        other.dominates(self)
    }

    /// Neither node dominates the other and they are not equal.
    ///
    /// Dominance is a partial order: two real points may compare false
    /// under every predicate except this one. False when either node is
    /// the sentinel.
    pub fn incomparable(&self, other: &Self) -> bool {
        self.cargo.is_some()
            && other.cargo.is_some()
            && !self.dominates(other)
            && !other.dominates(self)
            && !self.coords_equal(other)
    }
}

/// Arena of [`HyperNode`]s threaded by one circular list per dimension.
///
/// Traversing `next` links of dimension `i` from the sentinel visits the
/// nodes linked in that dimension and returns to the sentinel.
/// [`remove`](HyperList::remove) and [`reinsert`](HyperList::reinsert)
/// are exact inverses over the same dimension range; they are the only
/// way nodes move between active and excluded states during a sweep.
#[derive(Debug)]
pub struct HyperList {
    dimensions: usize,
    nodes: Vec<HyperNode>,
}

impl HyperList {
    /// Index of the structural sentinel node.
    pub const SENTINEL: usize = 0;

    /// Creates an empty multi-list over `dimensions` dimensions.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            nodes: vec![HyperNode::new(dimensions, None)],
        }
    }

    /// Number of dimensions (independent lists).
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Allocates a node for `cargo`, not yet linked in any dimension.
    pub fn add(&mut self, cargo: Vec<f64>) -> usize {
        self.nodes.push(HyperNode::new(self.dimensions, Some(cargo)));
        self.nodes.len() - 1
    }

    /// Borrow a node by index.
    pub fn node(&self, index: usize) -> &HyperNode {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut HyperNode {
        &mut self.nodes[index]
    }

    /// Successor of `node` in dimension `dim`.
    pub fn next_in(&self, node: usize, dim: usize) -> usize {
        self.nodes[node].next[dim]
    }

    /// Predecessor of `node` in dimension `dim`.
    pub fn prev_in(&self, node: usize, dim: usize) -> usize {
        self.nodes[node].prev[dim]
    }

    /// Coordinate `dim` of a non-sentinel node.
    pub(crate) fn coord(&self, node: usize, dim: usize) -> f64 {
        self.nodes[node]
            .cargo
            .as_ref()
            .expect("sentinel is never dereferenced for coordinates")[dim]
    }

    /// Number of nodes currently linked in dimension `dim`.
    pub fn len_in(&self, dim: usize) -> usize {
        let mut length = 0;
        let mut node = self.next_in(Self::SENTINEL, dim);
        while node != Self::SENTINEL {
            length += 1;
            node = self.next_in(node, dim);
        }
        length
    }

    /// Links `node` at the tail of dimension `dim`'s circular list.
    pub fn append(&mut self, node: usize, dim: usize) {
        let last = self.nodes[Self::SENTINEL].prev[dim];
        self.nodes[node].next[dim] = Self::SENTINEL;
        self.nodes[node].prev[dim] = last;
        self.nodes[Self::SENTINEL].prev[dim] = node;
        self.nodes[last].next[dim] = node;
    }

    /// Appends several nodes to dimension `dim` in order.
    pub fn extend(&mut self, nodes: &[usize], dim: usize) {
        for &node in nodes {
            self.append(node, dim);
        }
    }

    /// Unlinks `node` from dimensions `0..dim_count`, folding its
    /// coordinates into the running lower `bounds`.
    ///
    /// The node keeps its own links, so a later
    /// [`reinsert`](HyperList::reinsert) over the same range restores the
    /// exact pre-removal structure.
    pub fn remove(&mut self, node: usize, dim_count: usize, bounds: &mut [f64]) -> usize {
        for dim in 0..dim_count {
            let prev = self.nodes[node].prev[dim];
            let next = self.nodes[node].next[dim];
            self.nodes[prev].next[dim] = next;
            self.nodes[next].prev[dim] = prev;
            let c = self.coord(node, dim);
            if bounds[dim] > c {
                bounds[dim] = c;
            }
        }
        node
    }

    /// Relinks `node` into dimensions `0..dim_count`, updating `bounds`
    /// the same way as [`remove`](HyperList::remove).
    pub fn reinsert(&mut self, node: usize, dim_count: usize, bounds: &mut [f64]) {
        for dim in 0..dim_count {
            let prev = self.nodes[node].prev[dim];
            let next = self.nodes[node].next[dim];
            self.nodes[prev].next[dim] = node;
            self.nodes[next].prev[dim] = node;
            let c = self.coord(node, dim);
            if bounds[dim] > c {
                bounds[dim] = c;
            }
        }
    }

    /// Nodes of dimension `dim` in traversal order, for inspection.
    pub fn traverse(&self, dim: usize) -> Vec<usize> {
        let mut order = Vec::new();
        let mut node = self.next_in(Self::SENTINEL, dim);
        while node != Self::SENTINEL {
            order.push(node);
            node = self.next_in(node, dim);
        }
        order
    }

    /// Loads `nodes` into every dimension, each sorted ascending by the
    /// corresponding coordinate (stable on ties).
    pub fn load_sorted(&mut self, nodes: &[usize]) {
        for dim in 0..self.dimensions {
            let mut order = nodes.to_vec();
            order.sort_by(|&a, &b| {
                self.coord(a, dim)
                    .partial_cmp(&self.coord(b, dim))
                    .unwrap_or(Ordering::Equal)
            });
            self.extend(&order, dim);
        }
    }
}
