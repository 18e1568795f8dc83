//! Rectangle merging
//!
//! Collapses a noisy candidate set into maximal disjoint groups: two
//! rectangles belong to the same group iff they are transitively linked
//! by pairwise intersection, each group is replaced by its union
//! envelope, and envelopes wholly contained in another group's envelope
//! are discarded (nested decorative borders, bubbles inside panels).
//!
//! Connectivity is tracked with an index-based union-find partition, so
//! the result is defined by the adjacency graph alone - never by the
//! order pairs happen to be scanned - and duplicate-valued candidates
//! are unambiguous.

use panelize_core::Rect;

/// Union-find over candidate indices, with iterative path halving
struct Partition {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Partition {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }
}

/// Merge intersecting rectangles into disjoint group envelopes
///
/// Degenerate rectangles (non-positive width or height) are filtered out
/// and never pass through. An empty candidate list yields an empty
/// result. Output order follows each group's first member but is not
/// part of the contract; callers impose reading order with
/// [`crate::sort::sort_panels`].
pub fn merge(candidates: &[Rect]) -> Vec<Rect> {
    let rects: Vec<Rect> = candidates
        .iter()
        .copied()
        .filter(|r| r.w > 0 && r.h > 0)
        .collect();
    if rects.is_empty() {
        return Vec::new();
    }

    // Adjacency: an edge wherever the intersection is non-empty. The
    // candidate count is bounded upstream, so the quadratic pair scan
    // stays cheap.
    let mut partition = Partition::new(rects.len());
    for i in 0..rects.len() {
        for j in i + 1..rects.len() {
            if rects[i].intersect(&rects[j]).is_some() {
                partition.union(i, j);
            }
        }
    }

    // Fold each group into its union envelope, groups ordered by first
    // member.
    let mut envelope_of_root: Vec<Option<usize>> = vec![None; rects.len()];
    let mut envelopes: Vec<Rect> = Vec::new();
    for (i, r) in rects.iter().enumerate() {
        let root = partition.find(i);
        match envelope_of_root[root] {
            Some(slot) => envelopes[slot] = envelopes[slot].union(r),
            None => {
                envelope_of_root[root] = Some(envelopes.len());
                envelopes.push(*r);
            }
        }
    }

    // Containment pass: drop envelopes fully inside another group's
    // envelope. Identical envelopes keep their first occurrence.
    (0..envelopes.len())
        .filter(|&k| {
            !envelopes.iter().enumerate().any(|(j, outer)| {
                j != k && outer.contains(&envelopes[k]) && (*outer != envelopes[k] || j < k)
            })
        })
        .map(|k| envelopes[k])
        .collect()
}
