//! 最小生成树（Kruskal）
//!
//! 不连通的图得到最小生成森林，`is_connected` 为 false。
//! Prim 算法作为独立的对照实现。

use super::union_find::UnionFind;
use crate::error::Result;
use crate::graph::{Adjacency, Graph};
use crate::types::{round2, VertexId, Weight};
use indexmap::IndexSet;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// 生成树（或森林）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    /// 选中的边 (u, v, weight)，按选中顺序
    pub mst_edges: Vec<(VertexId, VertexId, Weight)>,
    /// 总权重（保留两位小数）
    pub total_weight: Weight,
    pub num_edges: usize,
    /// 边数是否等于顶点数 - 1
    pub is_connected: bool,
}

impl SpanningTree {
    fn from_edges(edges: Vec<(VertexId, VertexId, Weight)>, vertex_count: usize) -> Self {
        let total: Weight = edges.iter().map(|&(_, _, w)| w).sum();
        let num_edges = edges.len();
        Self {
            mst_edges: edges,
            total_weight: round2(total),
            num_edges,
            is_connected: num_edges + 1 == vertex_count,
        }
    }
}

/// Kruskal 最小生成树
///
/// 边按 (weight, u, v) 的自然顺序升序排列，权重相同时按端点决定先后。
pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    graph.ensure_not_empty()?;
    graph.validate()?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "kruskal"
    );

    let index: IndexSet<VertexId> = graph.vertices.iter().copied().collect();
    let mut sorted: Vec<(Weight, VertexId, VertexId)> =
        graph.edges.iter().map(|e| (e.weight, e.u, e.v)).collect();
    sorted.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut uf = UnionFind::new(index.len());
    let mut chosen = Vec::new();

    for (weight, u, v) in sorted {
        let (Some(iu), Some(iv)) = (index.get_index_of(&u), index.get_index_of(&v)) else {
            continue;
        };
        if uf.union(iu, iv) {
            chosen.push((u, v, weight));
            if uf.set_count() == 1 {
                break;
            }
        }
    }

    Ok(SpanningTree::from_edges(chosen, graph.vertex_count()))
}

/// Prim 候选边，按权重构成最小堆
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    weight: Weight,
    from: VertexId,
    to: VertexId,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.to.cmp(&self.to))
            .then_with(|| other.from.cmp(&self.from))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim 最小生成森林：按顶点列表顺序从每个未覆盖的顶点开始生长
pub fn prim(graph: &Graph) -> Result<SpanningTree> {
    graph.ensure_not_empty()?;
    let adjacency = Adjacency::build(graph)?;

    let mut in_tree: IndexSet<VertexId> = IndexSet::with_capacity(graph.vertex_count());
    let mut chosen = Vec::new();
    let mut heap = BinaryHeap::new();

    for &root in &graph.vertices {
        if !in_tree.insert(root) {
            continue;
        }
        push_candidates(&adjacency, root, &in_tree, &mut heap);

        while let Some(Candidate { weight, from, to }) = heap.pop() {
            if !in_tree.insert(to) {
                continue;
            }
            chosen.push((from, to, weight));
            push_candidates(&adjacency, to, &in_tree, &mut heap);
        }
    }

    Ok(SpanningTree::from_edges(chosen, graph.vertex_count()))
}

fn push_candidates(
    adjacency: &Adjacency,
    from: VertexId,
    in_tree: &IndexSet<VertexId>,
    heap: &mut BinaryHeap<Candidate>,
) {
    for &(to, weight) in adjacency.neighbors(from) {
        if !in_tree.contains(&to) {
            heap.push(Candidate { weight, from, to });
        }
    }
}
