//! 旅行商问题（TSP）近似
//!
//! 最近邻启发式：从第一个顶点出发，每次走向权重最小的未访问邻居。
//! 不保证最优。另提供 2-opt 局部改进和小图上的精确枚举（用于对比）。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{round2, serde_helpers, VertexId, Weight};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 精确枚举允许的最大顶点数
pub const EXACT_TOUR_LIMIT: usize = 10;

/// 巡回路线
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    /// 访问顺序；完整巡回以起点结尾
    pub tour: Vec<VertexId>,
    /// 总距离（保留两位小数）
    #[serde(serialize_with = "serde_helpers::distance")]
    pub total_distance: Weight,
    /// 走过的步数，即 `tour.len() - 1`；闭合巡回时等于顶点数
    pub vertices_visited: usize,
}

impl Tour {
    /// 是否回到起点（覆盖了所有顶点）
    pub fn is_closed(&self) -> bool {
        self.tour.len() > 1 && self.tour.first() == self.tour.last()
    }
}

/// 完全权重矩阵，非邻接顶点对为 +inf
///
/// 平行边以最后出现的为准。
struct WeightMatrix {
    weights: HashMap<(VertexId, VertexId), Weight>,
}

impl WeightMatrix {
    fn build(graph: &Graph) -> Result<Self> {
        graph.validate()?;
        let mut weights = HashMap::with_capacity(graph.edge_count() * 2);
        for edge in &graph.edges {
            weights.insert((edge.u, edge.v), edge.weight);
            weights.insert((edge.v, edge.u), edge.weight);
        }
        Ok(Self { weights })
    }

    fn get(&self, u: VertexId, v: VertexId) -> Weight {
        self.weights.get(&(u, v)).copied().unwrap_or(Weight::INFINITY)
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.weights.contains_key(&(u, v))
    }

    /// 沿顶点序列累加权重
    fn length(&self, route: &[VertexId]) -> Weight {
        route.windows(2).map(|pair| self.get(pair[0], pair[1])).sum()
    }
}

fn steps(route: &[VertexId]) -> usize {
    route.len().saturating_sub(1)
}

/// 最近邻巡回
///
/// 起点固定为顶点列表中的第一个顶点。距离相同时取顶点列表中靠前者。
/// 走完所有顶点后加上回到起点的边；中途无路可走则提前结束，不闭合。
pub fn nearest_neighbor(graph: &Graph) -> Result<Tour> {
    graph.ensure_not_empty()?;
    let matrix = WeightMatrix::build(graph)?;
    let start = graph.vertices[0];

    debug!(
        start,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "tsp nearest neighbor"
    );

    let mut tour = vec![start];
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut current = start;
    let mut total = 0.0;

    while visited.len() < graph.vertex_count() {
        let mut nearest = None;
        let mut min_dist = Weight::INFINITY;

        for &v in &graph.vertices {
            if visited.contains(&v) {
                continue;
            }
            let d = matrix.get(current, v);
            if d < min_dist {
                min_dist = d;
                nearest = Some(v);
            }
        }

        let Some(next) = nearest else {
            break;
        };
        tour.push(next);
        visited.insert(next);
        total += min_dist;
        current = next;
    }

    if tour.len() == graph.vertex_count() {
        total += matrix.get(current, start);
        tour.push(start);
    }

    let vertices_visited = steps(&tour);
    Ok(Tour {
        tour,
        total_distance: round2(total),
        vertices_visited,
    })
}

/// 2-opt 局部改进
///
/// 仅处理闭合巡回；反转 `tour[i..=j]` 当且仅当涉及的四条边都存在且总长严格缩短。
pub fn two_opt(graph: &Graph, initial: &Tour) -> Result<Tour> {
    let matrix = WeightMatrix::build(graph)?;
    if !initial.is_closed() || initial.tour.len() < 5 {
        return Ok(initial.clone());
    }

    let mut route = initial.tour.clone();
    let mut improved = true;
    let mut passes = 0usize;

    while improved {
        improved = false;
        passes += 1;

        for i in 1..route.len() - 2 {
            for j in (i + 1)..route.len() - 1 {
                let (a, b, c, d) = (route[i - 1], route[i], route[j], route[j + 1]);
                if ![(a, b), (c, d), (a, c), (b, d)]
                    .iter()
                    .all(|&(x, y)| matrix.has_edge(x, y))
                {
                    continue;
                }

                let old = matrix.get(a, b) + matrix.get(c, d);
                let new = matrix.get(a, c) + matrix.get(b, d);
                if new < old - 1e-12 {
                    route[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    debug!(passes, "2-opt finished");

    let total = matrix.length(&route);
    let vertices_visited = steps(&route);
    Ok(Tour {
        tour: route,
        total_distance: round2(total),
        vertices_visited,
    })
}

/// 最近邻 + 2-opt
pub fn nearest_neighbor_two_opt(graph: &Graph) -> Result<Tour> {
    let initial = nearest_neighbor(graph)?;
    two_opt(graph, &initial)
}

/// 下一个字典序排列，已是最后一个时返回 false
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// 精确最短巡回（枚举全部排列），仅限小图
///
/// 只使用存在的边；不存在哈密顿回路时返回只含起点、距离为 +inf 的结果。
pub fn exact_tour(graph: &Graph) -> Result<Tour> {
    graph.ensure_not_empty()?;
    if graph.vertex_count() > EXACT_TOUR_LIMIT {
        return Err(Error::TooLarge {
            vertices: graph.vertex_count(),
            limit: EXACT_TOUR_LIMIT,
        });
    }
    let matrix = WeightMatrix::build(graph)?;
    let start = graph.vertices[0];
    let rest = &graph.vertices[1..];

    let mut order: Vec<usize> = (0..rest.len()).collect();
    let mut best: Option<(Weight, Vec<usize>)> = None;
    let mut route = Vec::with_capacity(graph.vertex_count() + 1);

    loop {
        route.clear();
        route.push(start);
        route.extend(order.iter().map(|&i| rest[i]));
        route.push(start);

        let length = matrix.length(&route);
        if length.is_finite() && best.as_ref().map_or(true, |(b, _)| length < *b) {
            best = Some((length, order.clone()));
        }

        if !next_permutation(&mut order) {
            break;
        }
    }

    Ok(match best {
        Some((length, order)) => {
            let mut tour = vec![start];
            tour.extend(order.iter().map(|&i| rest[i]));
            tour.push(start);
            let vertices_visited = steps(&tour);
            Tour {
                tour,
                total_distance: round2(length),
                vertices_visited,
            }
        }
        None => Tour {
            tour: vec![start],
            total_distance: Weight::INFINITY,
            vertices_visited: 0,
        },
    })
}
