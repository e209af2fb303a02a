//! 图着色（贪心）
//!
//! 按给定顺序为每个顶点分配邻居未使用的最小颜色编号。得到的颜色数只是色数的上界，
//! 不保证最少。

use crate::error::Result;
use crate::graph::{Graph, NeighborSets};
use crate::types::{VertexId, VertexMap};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// 顶点处理顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColoringOrder {
    /// 顶点列表顺序
    #[default]
    VertexList,
    /// Welsh-Powell：按度数降序，度数相同保持顶点列表顺序
    WelshPowell,
}

/// 着色结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coloring {
    /// 顶点 -> 颜色编号
    pub coloring: VertexMap<usize>,
    /// 使用的颜色数（最大编号 + 1）
    pub chromatic_number: usize,
    /// 颜色编号 0..chromatic_number
    pub colors_used: Vec<usize>,
}

impl Coloring {
    pub fn color_of(&self, vertex: VertexId) -> Option<usize> {
        self.coloring.get(&vertex).copied()
    }

    /// 按颜色分组的顶点
    pub fn classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = vec![Vec::new(); self.chromatic_number];
        for (&v, &c) in &self.coloring {
            classes[c].push(v);
        }
        classes
    }
}

/// 按顶点列表顺序贪心着色
pub fn greedy(graph: &Graph) -> Result<Coloring> {
    color_with(graph, ColoringOrder::VertexList)
}

/// Welsh-Powell 顺序贪心着色
pub fn welsh_powell(graph: &Graph) -> Result<Coloring> {
    color_with(graph, ColoringOrder::WelshPowell)
}

/// 以指定顺序贪心着色
pub fn color_with(graph: &Graph, order: ColoringOrder) -> Result<Coloring> {
    graph.ensure_not_empty()?;
    let neighbors = NeighborSets::build(graph)?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        ?order,
        "greedy coloring"
    );

    let mut sequence = graph.vertices.clone();
    if order == ColoringOrder::WelshPowell {
        // 稳定排序，度数相同时保持原顺序
        sequence.sort_by(|a, b| neighbors.degree(*b).cmp(&neighbors.degree(*a)));
    }

    let mut assigned: VertexMap<usize> = VertexMap::with_capacity(graph.vertex_count());
    for v in sequence {
        let taken: HashSet<usize> = neighbors
            .neighbors(v)
            .filter_map(|u| assigned.get(&u).copied())
            .collect();

        let mut color = 0;
        while taken.contains(&color) {
            color += 1;
        }
        assigned.insert(v, color);
    }

    // 输出按顶点列表顺序排列
    let coloring: VertexMap<usize> = graph
        .vertices
        .iter()
        .filter_map(|v| assigned.get(v).map(|&c| (*v, c)))
        .collect();
    let chromatic_number = coloring.values().max().map_or(0, |m| m + 1);

    Ok(Coloring {
        coloring,
        chromatic_number,
        colors_used: (0..chromatic_number).collect(),
    })
}

/// 检查着色是否合法：每条边两端颜色不同，且每个顶点都有颜色
pub fn is_proper(graph: &Graph, coloring: &VertexMap<usize>) -> bool {
    graph.vertices.iter().all(|v| coloring.contains_key(v))
        && graph.edges.iter().filter(|e| e.u != e.v).all(|e| {
            match (coloring.get(&e.u), coloring.get(&e.v)) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_triangle_needs_three() {
        let graph = Graph::from_parts([0, 1, 2], [(0, 1), (1, 2), (2, 0)]);
        let result = greedy(&graph).unwrap();
        assert_eq!(result.chromatic_number, 3);
        assert_eq!(result.colors_used, vec![0, 1, 2]);
        assert!(is_proper(&graph, &result.coloring));
    }

    #[test]
    fn test_path_is_two_colorable() {
        let graph = Graph::from_parts([0, 1, 2, 3], [(0, 1), (1, 2), (2, 3)]);
        let result = greedy(&graph).unwrap();
        assert_eq!(result.coloring.values().copied().collect::<Vec<_>>(), vec![0, 1, 0, 1]);
        assert_eq!(result.chromatic_number, 2);
        assert_eq!(result.classes(), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_isolated_vertices_share_color() {
        let graph = Graph::with_vertices(4);
        let result = greedy(&graph).unwrap();
        assert_eq!(result.chromatic_number, 1);
        assert!(result.coloring.values().all(|&c| c == 0));
    }

    #[test]
    fn test_order_matters() {
        // 皇冠图，顶点依次为 a1,b1,a2,b2,a3,b3，ai 与 bj (i != j) 相连。
        // 二分图，但交错顺序使贪心用到 3 种颜色
        let graph = Graph::from_parts(
            [0, 1, 2, 3, 4, 5],
            [(0, 3), (0, 5), (2, 1), (2, 5), (4, 1), (4, 3)],
        );
        let result = greedy(&graph).unwrap();
        assert_eq!(result.chromatic_number, 3);
        assert!(is_proper(&graph, &result.coloring));
    }

    #[test]
    fn test_welsh_powell_star() {
        // 星形图：中心在列表末尾
        let graph = Graph::from_parts([1, 2, 3, 0], [(0, 1), (0, 2), (0, 3)]);
        let result = welsh_powell(&graph).unwrap();
        assert_eq!(result.color_of(0), Some(0));
        assert_eq!(result.chromatic_number, 2);
        // 输出顺序仍与顶点列表一致
        assert_eq!(result.coloring.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_is_proper_detects_conflict() {
        let graph = Graph::from_parts([0, 1], [(0, 1)]);
        let mut coloring = VertexMap::new();
        coloring.insert(0, 0);
        coloring.insert(1, 0);
        assert!(!is_proper(&graph, &coloring));
        coloring.insert(1, 1);
        assert!(is_proper(&graph, &coloring));
    }

    #[test]
    fn test_empty_graph() {
        assert!(matches!(greedy(&Graph::new()), Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_random_graphs_valid() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let n = rng.gen_range(1..25);
            let mut graph = Graph::with_vertices(n);
            for u in 0..n as VertexId {
                for v in (u + 1)..n as VertexId {
                    if rng.gen_bool(0.3) {
                        graph.add_edge(u, v);
                    }
                }
            }

            for order in [ColoringOrder::VertexList, ColoringOrder::WelshPowell] {
                let result = color_with(&graph, order).unwrap();
                assert!(is_proper(&graph, &result.coloring));
                let max = result.coloring.values().max().copied().unwrap();
                assert_eq!(result.chromatic_number, max + 1);
            }
        }
    }
}
