use std::fmt::Debug;

use crate::catalogue::StopIdx;
use crate::weight::Weight;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIdx(pub u32);
impl Debug for VertexIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("v#{}", self.0))
    }
}

impl From<StopIdx> for VertexIdx {
    fn from(stop: StopIdx) -> Self {
        VertexIdx(stop.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeIdx(pub u32);
impl Debug for EdgeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("e#{}", self.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePayload<W> {
    pub from: VertexIdx,
    pub to: VertexIdx,
    pub weight: W,
}

/// A directed weighted graph with a fixed vertex set `0..num_vertices`.
/// Edge ids are handed out densely in insertion order.
#[derive(Debug)]
pub struct Graph<W> {
    edges: Vec<EdgePayload<W>>,
    outgoing: Vec<Vec<EdgeIdx>>,
}

impl<W: Weight> Graph<W> {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            edges: vec![],
            outgoing: vec![vec![]; num_vertices],
        }
    }

    pub fn add_edge(&mut self, from: VertexIdx, to: VertexIdx, weight: W) -> EdgeIdx {
        assert!(
            (from.0 as usize) < self.num_vertices() && (to.0 as usize) < self.num_vertices(),
            "Edge {:?} -> {:?} is out of range",
            from,
            to
        );
        let edge_idx = EdgeIdx(self.edges.len() as u32);
        self.edges.push(EdgePayload { from, to, weight });
        self.outgoing[from.0 as usize].push(edge_idx);
        edge_idx
    }

    pub fn edge(&self, edge_idx: EdgeIdx) -> &EdgePayload<W> {
        &self.edges[edge_idx.0 as usize]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeIdx, &EdgePayload<W>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeIdx(i as u32), e))
    }

    pub fn outgoing(&self, vertex: VertexIdx) -> &[EdgeIdx] {
        &self.outgoing[vertex.0 as usize]
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexIdx> + use<W> {
        (0..self.outgoing.len() as u32).map(VertexIdx)
    }

    pub fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_get_dense_ids() {
        let mut graph: Graph<u32> = Graph::new(3);
        let e0 = graph.add_edge(VertexIdx(0), VertexIdx(1), 5);
        let e1 = graph.add_edge(VertexIdx(0), VertexIdx(2), 7);
        let e2 = graph.add_edge(VertexIdx(2), VertexIdx(1), 1);

        assert_eq!((e0, e1, e2), (EdgeIdx(0), EdgeIdx(1), EdgeIdx(2)));
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.outgoing(VertexIdx(0)), &[e0, e1]);
        assert!(graph.outgoing(VertexIdx(1)).is_empty());
        assert_eq!(graph.edge(e2).weight, 1);
        assert_eq!(graph.vertices().count(), 3);
    }

    #[test]
    #[should_panic]
    fn rejects_unknown_vertices() {
        let mut graph: Graph<u32> = Graph::new(2);
        graph.add_edge(VertexIdx(0), VertexIdx(2), 1);
    }
}
