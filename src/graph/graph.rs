//! 图数据结构
//!
//! 由调用方构造的顶点列表 + 边列表。引擎只读取，从不修改。

use super::edge::Edge;
use crate::error::{Error, Result};
use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 无向带权图
///
/// 顶点列表是权威的：算法按它的顺序迭代，不从边集推导顶点。
/// 不强制连通、无环或无平行边。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// 有序顶点列表
    pub vertices: Vec<VertexId>,
    /// 边列表
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 由顶点和边创建图
    pub fn from_parts<E: Into<Edge>>(
        vertices: impl IntoIterator<Item = VertexId>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    /// 创建包含 `0..n` 顶点、没有边的图
    pub fn with_vertices(n: usize) -> Self {
        Self {
            vertices: (0..n as VertexId).collect(),
            edges: Vec::new(),
        }
    }

    /// 添加顶点
    pub fn add_vertex(&mut self, id: VertexId) -> &mut Self {
        self.vertices.push(id);
        self
    }

    /// 添加默认权重的边
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> &mut Self {
        self.edges.push(Edge::new(u, v));
        self
    }

    /// 添加带权边
    pub fn add_weighted_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> &mut Self {
        self.edges.push(Edge::weighted(u, v, weight));
        self
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 第一个顶点（各算法的默认起点）
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    /// 非空检查，空图返回 `Error::EmptyGraph`
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyGraph)
        } else {
            Ok(())
        }
    }

    /// 检查每条边的端点都在顶点列表中
    pub fn validate(&self) -> Result<()> {
        let known: HashSet<VertexId> = self.vertices.iter().copied().collect();
        for edge in &self.edges {
            for endpoint in [edge.u, edge.v] {
                if !known.contains(&endpoint) {
                    return Err(Error::VertexNotFound(endpoint));
                }
            }
        }
        Ok(())
    }

    /// 所有边权重之和
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(0, 1).add_weighted_edge(1, 2, 2.5);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.first_vertex(), Some(0));
        assert_eq!(graph.total_weight(), 3.5);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_endpoint() {
        let graph = Graph::from_parts([0, 1], [(0, 1), (1, 9)]);
        match graph.validate() {
            Err(Error::VertexNotFound(9)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.first_vertex(), None);
        assert!(matches!(graph.ensure_not_empty(), Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_sparse_vertex_ids() {
        let graph = Graph::from_parts([10, 4, 7], [(10, 7, 1.0)]);
        assert_eq!(graph.first_vertex(), Some(10));
        assert!(graph.contains_vertex(4));
        assert!(!graph.contains_vertex(0));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_deserialize_graph() {
        let graph: Graph = serde_json::from_str(
            r#"{"vertices": [0, 1, 2], "edges": [[0, 1, 2.0], [1, 2]], "num_vertices": 3}"#,
        )
        .unwrap();
        assert_eq!(graph.vertices, vec![0, 1, 2]);
        assert_eq!(graph.edges[1].weight, 1.0);
    }
}
