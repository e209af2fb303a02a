//! 邻接视图
//!
//! 每个算法在每次调用时从 [`Graph`] 重新构建，只读，不在调用之间共享。

use super::graph::Graph;
use crate::error::{Error, Result};
use crate::types::{VertexId, VertexMap, Weight};
use indexmap::IndexSet;

/// 带权邻接表：顶点 -> [(邻居, 权重)]
///
/// 键的顺序与顶点列表一致；没有关联边的顶点对应空列表。
#[derive(Debug, Clone)]
pub struct Adjacency {
    lists: VertexMap<Vec<(VertexId, Weight)>>,
}

impl Adjacency {
    /// 构建邻接表，每条边同时插入两个端点的列表
    ///
    /// 端点不在顶点列表中时返回 `Error::VertexNotFound`。
    pub fn build(graph: &Graph) -> Result<Self> {
        let mut lists: VertexMap<Vec<(VertexId, Weight)>> = graph
            .vertices
            .iter()
            .map(|&v| (v, Vec::new()))
            .collect();

        for edge in &graph.edges {
            if !lists.contains_key(&edge.v) {
                return Err(Error::VertexNotFound(edge.v));
            }
            lists
                .get_mut(&edge.u)
                .ok_or(Error::VertexNotFound(edge.u))?
                .push((edge.v, edge.weight));
            if let Some(list) = lists.get_mut(&edge.v) {
                list.push((edge.u, edge.weight));
            }
        }

        Ok(Self { lists })
    }

    /// 顶点的邻居列表（未知顶点返回空切片）
    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        self.lists.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 顶点度数（平行边分别计数）
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    /// 按顶点列表顺序迭代顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.lists.keys().copied()
    }

    /// u 与 v 之间最轻的边权重
    pub fn weight_between(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.neighbors(u)
            .iter()
            .filter(|(n, _)| *n == v)
            .map(|&(_, w)| w)
            .reduce(Weight::min)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// 无权邻居集合：顶点 -> {邻居}
///
/// 平行边合并；集合保持插入顺序以保证遍历确定性。
#[derive(Debug, Clone)]
pub struct NeighborSets {
    sets: VertexMap<IndexSet<VertexId>>,
}

impl NeighborSets {
    pub fn build(graph: &Graph) -> Result<Self> {
        let adjacency = Adjacency::build(graph)?;
        let sets = adjacency
            .lists
            .iter()
            .map(|(&v, list)| (v, list.iter().map(|&(n, _)| n).collect()))
            .collect();
        Ok(Self { sets })
    }

    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.sets.get(&vertex).into_iter().flatten().copied()
    }

    pub fn contains(&self, u: VertexId, v: VertexId) -> bool {
        self.sets.get(&u).map_or(false, |s| s.contains(&v))
    }

    /// 不同邻居的个数
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.sets.get(&vertex).map_or(0, IndexSet::len)
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.sets.keys().copied()
    }
}
