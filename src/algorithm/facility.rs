//! 设施选址（贪心 k-center）
//!
//! 距离一律使用 BFS 跳数，忽略边权重。不可达的顶点距离为 `f64::INFINITY`，
//! 不做特殊处理：不连通的输入会得到无穷大的 `max_distance`。

use crate::error::Result;
use crate::graph::{Graph, NeighborSets};
use crate::types::{serde_helpers, VertexId, VertexMap, Weight};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// 中心选取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Placement {
    /// 最远优先，k = max(1, n / 3 + 1)
    #[default]
    KCenter,
    /// 贪心支配集：每个顶点要么是中心，要么与某个中心相邻
    DominatingSet,
}

/// 选址结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityAssignment {
    /// 按选中顺序排列的中心
    pub centers: Vec<VertexId>,
    pub num_centers: usize,
    /// 顶点 -> 所属中心
    pub assignment: VertexMap<VertexId>,
    /// 覆盖半径
    #[serde(serialize_with = "serde_helpers::distance")]
    pub max_distance: Weight,
    /// 顶点 -> 到所属中心的距离
    #[serde(skip)]
    pub distances: VertexMap<Weight>,
}

impl FacilityAssignment {
    /// 平均分配距离，存在不可达顶点时为无穷大
    pub fn average_distance(&self) -> Weight {
        if self.distances.is_empty() {
            return 0.0;
        }
        self.distances.values().sum::<Weight>() / self.distances.len() as Weight
    }

    /// 分配给某个中心的顶点
    pub fn members_of(&self, center: VertexId) -> Vec<VertexId> {
        self.assignment
            .iter()
            .filter(|(_, &c)| c == center)
            .map(|(&v, _)| v)
            .collect()
    }
}

/// 中心个数：max(1, n / 3 + 1)
pub fn center_budget(vertex_count: usize) -> usize {
    (vertex_count / 3 + 1).max(1)
}

/// 最远优先 k-center
pub fn k_center(graph: &Graph) -> Result<FacilityAssignment> {
    graph.ensure_not_empty()?;
    let neighbors = NeighborSets::build(graph)?;
    let k = center_budget(graph.vertex_count());

    debug!(vertices = graph.vertex_count(), k, "k-center (farthest first)");

    let mut centers: Vec<VertexId> = Vec::with_capacity(k);
    let mut center_set: IndexSet<VertexId> = IndexSet::with_capacity(k);
    let mut tables: Vec<VertexMap<Weight>> = Vec::with_capacity(k);
    // 每个顶点到当前中心集合的最小距离
    let mut nearest: VertexMap<Weight> = graph
        .vertices
        .iter()
        .map(|&v| (v, Weight::INFINITY))
        .collect();

    let mut next = graph.first_vertex();
    while let Some(center) = next {
        let table = hop_distances(graph, &neighbors, center);
        for (v, d) in nearest.iter_mut() {
            if let Some(&hop) = table.get(v) {
                *d = d.min(hop);
            }
        }
        centers.push(center);
        center_set.insert(center);
        tables.push(table);

        if centers.len() >= k {
            break;
        }

        next = None;
        let mut farthest = Weight::NEG_INFINITY;
        for (&v, &d) in &nearest {
            if !center_set.contains(&v) && d > farthest {
                farthest = d;
                next = Some(v);
            }
        }
    }

    Ok(assign(graph, centers, &tables))
}

/// 贪心支配集选址
///
/// 每轮选择能新覆盖最多顶点的未覆盖顶点（自身计 1），得分相同取顶点列表中靠前者。
pub fn dominating_set(graph: &Graph) -> Result<FacilityAssignment> {
    graph.ensure_not_empty()?;
    let neighbors = NeighborSets::build(graph)?;

    debug!(vertices = graph.vertex_count(), "k-center (dominating set)");

    let mut uncovered: IndexSet<VertexId> = graph.vertices.iter().copied().collect();
    let mut centers = Vec::new();
    let mut tables = Vec::new();

    while !uncovered.is_empty() {
        let mut best: Option<(VertexId, usize)> = None;
        for &v in &uncovered {
            let score = 1 + neighbors
                .neighbors(v)
                .filter(|u| *u != v && uncovered.contains(u))
                .count();
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((v, score));
            }
        }

        let Some((center, _)) = best else { break };
        uncovered.shift_remove(&center);
        for u in neighbors.neighbors(center) {
            uncovered.shift_remove(&u);
        }
        tables.push(hop_distances(graph, &neighbors, center));
        centers.push(center);
    }

    Ok(assign(graph, centers, &tables))
}

/// 以指定策略选址
pub fn place(graph: &Graph, placement: Placement) -> Result<FacilityAssignment> {
    match placement {
        Placement::KCenter => k_center(graph),
        Placement::DominatingSet => dominating_set(graph),
    }
}

/// 把每个顶点分配到最近的中心，距离相同取先选中的中心
fn assign(graph: &Graph, centers: Vec<VertexId>, tables: &[VertexMap<Weight>]) -> FacilityAssignment {
    let mut assignment = VertexMap::with_capacity(graph.vertex_count());
    let mut distances = VertexMap::with_capacity(graph.vertex_count());
    let mut max_distance: Weight = 0.0;

    for &v in &graph.vertices {
        let mut best: Option<(VertexId, Weight)> = None;
        for (&center, table) in centers.iter().zip(tables) {
            let d = table.get(&v).copied().unwrap_or(Weight::INFINITY);
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((center, d));
            }
        }
        if let Some((center, d)) = best {
            assignment.insert(v, center);
            distances.insert(v, d);
            max_distance = max_distance.max(d);
        }
    }

    FacilityAssignment {
        num_centers: centers.len(),
        centers,
        assignment,
        max_distance,
        distances,
    }
}

/// 从 source 出发的 BFS 跳数，不可达为无穷大
fn hop_distances(graph: &Graph, neighbors: &NeighborSets, source: VertexId) -> VertexMap<Weight> {
    let mut dist: VertexMap<Weight> = graph
        .vertices
        .iter()
        .map(|&v| (v, Weight::INFINITY))
        .collect();
    let mut queue = VecDeque::new();

    if let Some(d) = dist.get_mut(&source) {
        *d = 0.0;
        queue.push_back(source);
    }

    while let Some(v) = queue.pop_front() {
        let next = dist.get(&v).copied().unwrap_or(Weight::INFINITY) + 1.0;
        for u in neighbors.neighbors(v) {
            if let Some(d) = dist.get_mut(&u) {
                if d.is_infinite() {
                    *d = next;
                    queue.push_back(u);
                }
            }
        }
    }

    dist
}
