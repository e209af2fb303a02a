//! 连通分量
//!
//! 显式栈的迭代 DFS，栈深度不受图直径影响。分量按发现顺序返回，分量内部顶点升序。

use crate::error::Result;
use crate::graph::{Graph, NeighborSets};
use crate::types::VertexId;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// 连通分量划分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Components {
    /// 各分量的顶点（升序）
    pub components: Vec<Vec<VertexId>>,
    pub num_components: usize,
    /// 是否恰好一个分量
    pub is_connected: bool,
    pub largest_component_size: usize,
}

impl Components {
    fn from_components(components: Vec<Vec<VertexId>>) -> Self {
        let num_components = components.len();
        let largest_component_size = components.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            components,
            num_components,
            is_connected: num_components == 1,
            largest_component_size,
        }
    }
}

/// DFS 求连通分量
pub fn components(graph: &Graph) -> Result<Components> {
    graph.ensure_not_empty()?;
    let neighbors = NeighborSets::build(graph)?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "connected components (dfs)"
    );

    let mut visited = HashSet::with_capacity(graph.vertex_count());
    let mut found = Vec::new();
    let mut stack = Vec::new();

    for &root in &graph.vertices {
        if !visited.insert(root) {
            continue;
        }

        let mut component = Vec::new();
        stack.push(root);
        while let Some(v) = stack.pop() {
            component.push(v);
            for u in neighbors.neighbors(v) {
                if visited.insert(u) {
                    stack.push(u);
                }
            }
        }

        component.sort_unstable();
        found.push(component);
    }

    Ok(Components::from_components(found))
}

/// BFS 求连通分量，结果与 [`components`] 相同
pub fn components_bfs(graph: &Graph) -> Result<Components> {
    graph.ensure_not_empty()?;
    let neighbors = NeighborSets::build(graph)?;

    let mut visited = HashSet::with_capacity(graph.vertex_count());
    let mut found = Vec::new();
    let mut queue = VecDeque::new();

    for &root in &graph.vertices {
        if !visited.insert(root) {
            continue;
        }

        let mut component = Vec::new();
        queue.push_back(root);
        while let Some(v) = queue.pop_front() {
            component.push(v);
            for u in neighbors.neighbors(v) {
                if visited.insert(u) {
                    queue.push_back(u);
                }
            }
        }

        component.sort_unstable();
        found.push(component);
    }

    Ok(Components::from_components(found))
}

/// 图是否连通；空图返回 `Error::EmptyGraph`
pub fn is_connected(graph: &Graph) -> Result<bool> {
    Ok(components(graph)?.is_connected)
}
