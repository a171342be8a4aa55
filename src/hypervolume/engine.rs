//! Hypervolume indicator via dimension sweep (Fonseca et al., 2006).

use super::multi_list::HyperList;
use crate::error::{Error, Result};

/// Computes the hypervolume dominated by a point set relative to a fixed
/// reference point.
///
/// All coordinates are minimization-oriented: a point counts only if it
/// weakly dominates the reference (is at most the reference in every
/// dimension). Callers with maximization objectives must negate them
/// first.
///
/// # Example
///
/// ```
/// use pareto_kit::hypervolume::HyperVolume;
///
/// let hv = HyperVolume::new(vec![2.0, 2.0]);
/// let volume = hv.compute(&[vec![1.0, 1.0]]).unwrap();
/// assert!((volume - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HyperVolume {
    reference: Vec<f64>,
}

impl HyperVolume {
    /// Creates an engine for the given reference point.
    pub fn new(reference: Vec<f64>) -> Self {
        Self { reference }
    }

    /// The reference point bounding the measured region.
    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    /// Computes the volume of the region dominated by `front` and
    /// bounded by the reference point.
    ///
    /// An empty front (or one with no point inside the reference
    /// boundary) has volume 0. A point whose dimensionality differs from
    /// the reference is a configuration error.
    pub fn compute(&self, front: &[Vec<f64>]) -> Result<f64> {
        let dims = self.reference.len();
        for (index, point) in front.iter().enumerate() {
            if point.len() != dims {
                return Err(Error::DimensionMismatch {
                    expected: dims,
                    got: point.len(),
                    index,
                });
            }
        }
        if dims == 0 {
            return Ok(0.0);
        }

        // Keep points inside the reference boundary, shifted so the
        // reference sits at the origin and all coordinates are negative.
        let relevant: Vec<Vec<f64>> = front
            .iter()
            .filter(|p| p.iter().zip(&self.reference).all(|(x, r)| x <= r))
            .map(|p| p.iter().zip(&self.reference).map(|(x, r)| x - r).collect())
            .collect();
        if relevant.is_empty() {
            return Ok(0.0);
        }

        let count = relevant.len();
        let mut list = HyperList::new(dims);
        let nodes: Vec<usize> = relevant.into_iter().map(|p| list.add(p)).collect();
        list.load_sorted(&nodes);

        let mut sweep = Sweep { list };
        let mut bounds = vec![f64::NEG_INFINITY; dims];
        Ok(sweep.recurse(dims - 1, count, &mut bounds))
    }
}

/// Convenience wrapper over [`HyperVolume`] for one-shot queries.
pub fn hypervolume(front: &[Vec<f64>], reference: &[f64]) -> Result<f64> {
    HyperVolume::new(reference.to_vec()).compute(front)
}

/// One in-flight sweep over a loaded multi-list.
struct Sweep {
    list: HyperList,
}

impl Sweep {
    /// Volume spanned by dimensions `0..=dim` of the nodes currently
    /// linked in dimension `dim`, restricted by `bounds`.
    ///
    /// Walks dimension `dim` slab by slab: each node is unlinked from the
    /// lower dimensions, the inner volume is computed recursively, the
    /// slab thickness along `dim` is multiplied in, and the node is
    /// reinserted so the next slab sees the original structure. The
    /// `ignore`/`area` caches let a node whose inner area cannot exceed
    /// its predecessor's skip the recursion entirely.
    fn recurse(&mut self, dim: usize, length: usize, bounds: &mut [f64]) -> f64 {
        const S: usize = HyperList::SENTINEL;

        if length == 0 {
            return 0.0;
        }
        if dim == 0 {
            // Coordinates are negative: the deepest point alone spans
            // the width back to the reference at the origin.
            return -self.list.coord(self.list.next_in(S, 0), 0);
        }
        if dim == 1 {
            // Two dimensions: one pass over the staircase.
            let mut q = self.list.next_in(S, 1);
            let mut h = self.list.coord(q, 0);
            let mut p = self.list.next_in(q, 1);
            let mut hvol = 0.0;
            while p != S {
                hvol += h * (self.list.coord(q, 1) - self.list.coord(p, 1));
                let p0 = self.list.coord(p, 0);
                if p0 < h {
                    h = p0;
                }
                q = p;
                p = self.list.next_in(q, 1);
            }
            hvol += h * self.list.coord(q, 1);
            return hvol;
        }

        let mut length = length;
        let mut hvol = 0.0;

        // Ignore flags raised by deeper dimensions expire here.
        let mut node = self.list.prev_in(S, dim);
        while node != S {
            if self.list.node(node).ignore < dim {
                self.list.node_mut(node).ignore = 0;
            }
            node = self.list.prev_in(node, dim);
        }

        // Strip trailing nodes that cannot change the result under the
        // current bounds; they are reinserted one slab at a time below.
        let mut p = S;
        let mut q = self.list.prev_in(S, dim);
        while length > 1
            && (self.list.coord(q, dim) > bounds[dim]
                || self.list.coord(self.list.prev_in(q, dim), dim) >= bounds[dim])
        {
            p = q;
            self.list.remove(p, dim, bounds);
            q = self.list.prev_in(p, dim);
            length -= 1;
        }

        let q_prev = self.list.prev_in(q, dim);
        if length > 1 {
            hvol = self.list.node(q_prev).volume[dim]
                + self.list.node(q_prev).area[dim]
                    * (self.list.coord(q, dim) - self.list.coord(q_prev, dim));
        } else {
            // Lone remaining point: its inner areas are the running
            // products of its own (negated) coordinates.
            let coords: Vec<f64> = (0..dim).map(|i| self.list.coord(q, i)).collect();
            let node = self.list.node_mut(q);
            node.area[0] = 1.0;
            for (i, &c) in coords.iter().enumerate() {
                node.area[i + 1] = node.area[i] * -c;
            }
        }
        self.list.node_mut(q).volume[dim] = hvol;
        self.update_area(q, q_prev, dim, length, bounds);

        // Reinsert the stripped nodes front to back, accumulating one
        // slab of volume per node.
        while p != S {
            let p_coord = self.list.coord(p, dim);
            hvol += self.list.node(q).area[dim] * (p_coord - self.list.coord(q, dim));
            bounds[dim] = p_coord;
            self.list.reinsert(p, dim, bounds);
            length += 1;
            q = p;
            p = self.list.next_in(p, dim);
            self.list.node_mut(q).volume[dim] = hvol;
            let q_prev = self.list.prev_in(q, dim);
            self.update_area(q, q_prev, dim, length, bounds);
        }

        hvol -= self.list.node(q).area[dim] * self.list.coord(q, dim);
        hvol
    }

    /// Refreshes `q.area[dim]`, recursing into the lower dimensions
    /// unless the node's ignore flag says the cached value still holds.
    fn update_area(&mut self, q: usize, q_prev: usize, dim: usize, length: usize, bounds: &mut [f64]) {
        if self.list.node(q).ignore >= dim {
            let prev_area = self.list.node(q_prev).area[dim];
            self.list.node_mut(q).area[dim] = prev_area;
        } else {
            let area = self.recurse(dim - 1, length, bounds);
            self.list.node_mut(q).area[dim] = area;
            if area <= self.list.node(q_prev).area[dim] {
                self.list.node_mut(q).ignore = dim;
            }
        }
    }
}
