//! 单源最短路径（Dijkstra）
//!
//! 要求非负权重；负权重或 NaN 在运行前被拒绝。
//! 另有按边数计的广度优先路径 [`bfs_path`]，不看权重。

use crate::error::{Error, Result};
use crate::graph::{Adjacency, Graph, NeighborSets};
use crate::types::{serde_helpers, VertexId, VertexMap, Weight};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use tracing::{debug, warn};

/// 最短路径树
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    /// 起点到各顶点的距离，不可达为 +inf
    #[serde(serialize_with = "serde_helpers::distance_map")]
    pub distances: VertexMap<Weight>,
    /// 前驱顶点；起点和不可达顶点为 None（输出为 -1）
    #[serde(serialize_with = "serde_helpers::parent_map")]
    pub parent: VertexMap<Option<VertexId>>,
    /// 实际使用的起点
    pub start: VertexId,
}

impl ShortestPaths {
    /// 到顶点的距离，顶点不在图中时返回 None
    pub fn distance_to(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance_to(vertex).map_or(false, Weight::is_finite)
    }

    /// 沿前驱指针重构起点到 target 的路径
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(Some(prev)) = self.parent.get(&current) {
            path.push(*prev);
            current = *prev;
        }
        path.reverse();
        Some(path)
    }
}

/// 两点之间的一条最短路径
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    /// 路径上的顶点序列（含两端）
    pub vertices: Vec<VertexId>,
    /// 路径总权重
    pub distance: Weight,
}

impl Path {
    /// 路径边数
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// 优先队列元素，按 (距离, 顶点) 构成最小堆
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    distance: Weight,
    vertex: VertexId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap 是最大堆，反转比较
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 从 `start` 出发的 Dijkstra
///
/// `start` 缺省或不在顶点列表中时使用第一个顶点；空图的起点为 0，距离表为空。
pub fn dijkstra(graph: &Graph, start: Option<VertexId>) -> Result<ShortestPaths> {
    let adjacency = Adjacency::build(graph)?;
    for edge in &graph.edges {
        if edge.weight < 0.0 || edge.weight.is_nan() {
            return Err(Error::NegativeWeight {
                u: edge.u,
                v: edge.v,
                weight: edge.weight,
            });
        }
    }

    let start = match start {
        Some(s) if graph.contains_vertex(s) => s,
        requested => {
            let fallback = graph.first_vertex().unwrap_or(0);
            if let Some(s) = requested {
                warn!(requested = s, fallback, "起点不在顶点列表中，改用第一个顶点");
            }
            fallback
        }
    };

    debug!(
        start,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "dijkstra"
    );

    let mut distances: VertexMap<Weight> = graph
        .vertices
        .iter()
        .map(|&v| (v, Weight::INFINITY))
        .collect();
    let mut parent: VertexMap<Option<VertexId>> =
        graph.vertices.iter().map(|&v| (v, None)).collect();

    if graph.is_empty() {
        return Ok(ShortestPaths {
            distances,
            parent,
            start,
        });
    }

    distances.insert(start, 0.0);
    let mut visited = HashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(State {
        distance: 0.0,
        vertex: start,
    });

    while let Some(State { vertex: u, .. }) = heap.pop() {
        if !visited.insert(u) {
            continue;
        }
        let base = distances.get(&u).copied().unwrap_or(Weight::INFINITY);

        for &(v, weight) in adjacency.neighbors(u) {
            if visited.contains(&v) {
                continue;
            }
            let candidate = base + weight;
            if let Some(current) = distances.get_mut(&v) {
                if candidate < *current {
                    *current = candidate;
                    parent.insert(v, Some(u));
                    heap.push(State {
                        distance: candidate,
                        vertex: v,
                    });
                }
            }
        }
    }

    Ok(ShortestPaths {
        distances,
        parent,
        start,
    })
}

/// 查找 source 到 target 的最短路径，不可达时返回 None
pub fn find_path(graph: &Graph, source: VertexId, target: VertexId) -> Result<Option<Path>> {
    for vertex in [source, target] {
        if !graph.contains_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }
    }

    let tree = dijkstra(graph, Some(source))?;
    Ok(tree.path_to(target).map(|vertices| Path {
        distance: tree.distance_to(target).unwrap_or(Weight::INFINITY),
        vertices,
    }))
}

/// 边数最少的路径（广度优先），不可达时返回 None
///
/// 返回的 `distance` 是边数而不是权重之和。
pub fn bfs_path(graph: &Graph, source: VertexId, target: VertexId) -> Result<Option<Path>> {
    for vertex in [source, target] {
        if !graph.contains_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }
    }

    let neighbors = NeighborSets::build(graph)?;
    let mut parent: VertexMap<Option<VertexId>> = VertexMap::new();
    parent.insert(source, None);
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        if u == target {
            break;
        }
        for v in neighbors.neighbors(u) {
            if !parent.contains_key(&v) {
                parent.insert(v, Some(u));
                queue.push_back(v);
            }
        }
    }

    if !parent.contains_key(&target) {
        debug!(source, target, "bfs found no path");
        return Ok(None);
    }

    let mut vertices = vec![target];
    let mut current = target;
    while let Some(Some(prev)) = parent.get(&current) {
        vertices.push(*prev);
        current = *prev;
    }
    vertices.reverse();

    Ok(Some(Path {
        distance: (vertices.len() - 1) as Weight,
        vertices,
    }))
}
