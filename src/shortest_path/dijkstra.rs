use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::graph::{EdgeIdx, Graph, VertexIdx};
use crate::weight::Weight;

#[derive(Debug, Clone, Copy)]
struct QueueItem<W> {
    vertex: VertexIdx,
    weight: W,
}
impl<W: Weight> PartialEq for QueueItem<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<W: Weight> Eq for QueueItem<W> {}
impl<W: Weight> PartialOrd for QueueItem<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<W: Weight> Ord for QueueItem<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.0.cmp(&self.vertex.0))
    }
}

#[derive(Debug, Clone, Copy)]
struct TreeEntry<W> {
    weight: W,
    prev_edge: Option<EdgeIdx>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo<W> {
    pub weight: W,
    pub edges: Vec<EdgeIdx>,
}

/// Answers shortest-path queries between any two vertices of a frozen graph.
///
/// On construction a shortest-path tree is settled for every source vertex, so
/// queries only walk predecessor edges. Edge weights must be non-negative.
pub struct Router<W> {
    graph: Graph<W>,
    // Rows=sources, columns=targets.
    trees: Vec<Vec<Option<TreeEntry<W>>>>,
}

impl<W: Weight> Router<W> {
    pub fn new(graph: Graph<W>) -> Self {
        let trees = graph
            .vertices()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|source| shortest_path_tree(&graph, source))
            .collect();
        debug!(
            "Settled shortest-path trees for {} vertices over {} edges",
            graph.num_vertices(),
            graph.num_edges()
        );
        Self { graph, trees }
    }

    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Returns the lightest path from `from` to `to` as a sequence of edges, or
    /// `None` if `to` is unreachable. A path from a vertex to itself has no edges.
    pub fn build_route(&self, from: VertexIdx, to: VertexIdx) -> Option<RouteInfo<W>> {
        let tree = self.trees.get(from.0 as usize)?;
        let target = (*tree.get(to.0 as usize)?)?;

        let mut edges = vec![];
        let mut prev_edge = target.prev_edge;
        while let Some(edge_idx) = prev_edge {
            edges.push(edge_idx);
            let edge = self.graph.edge(edge_idx);
            prev_edge = tree[edge.from.0 as usize].and_then(|entry| entry.prev_edge);
        }
        edges.reverse();

        Some(RouteInfo {
            weight: target.weight,
            edges,
        })
    }
}

fn shortest_path_tree<W: Weight>(graph: &Graph<W>, source: VertexIdx) -> Vec<Option<TreeEntry<W>>> {
    let mut tree: Vec<Option<TreeEntry<W>>> = vec![None; graph.num_vertices()];
    let mut settled = vec![false; graph.num_vertices()];
    tree[source.0 as usize] = Some(TreeEntry {
        weight: W::zero(),
        prev_edge: None,
    });

    let mut queue: BinaryHeap<QueueItem<W>> = BinaryHeap::new();
    queue.push(QueueItem {
        vertex: source,
        weight: W::zero(),
    });

    while let Some(QueueItem { vertex, weight }) = queue.pop() {
        if settled[vertex.0 as usize] {
            continue;
        }
        settled[vertex.0 as usize] = true;

        for &edge_idx in graph.outgoing(vertex) {
            let edge = graph.edge(edge_idx);
            let to = edge.to.0 as usize;
            if settled[to] {
                continue;
            }
            let candidate = weight + edge.weight;
            let improves = match &tree[to] {
                None => true,
                Some(known) => candidate.total_cmp(&known.weight) == Ordering::Less,
            };
            if improves {
                tree[to] = Some(TreeEntry {
                    weight: candidate,
                    prev_edge: Some(edge_idx),
                });
                queue.push(QueueItem {
                    vertex: edge.to,
                    weight: candidate,
                });
            }
        }
    }
    tree
}
