//! 算法调度
//!
//! 按名称选择算法并把结果规整成统一形状。`run` 从不返回 `Err`，也不 panic：
//! 空图、非法输入、未知名称都以结果数据的形式返回。
//!
//! JSON 形状：
//! - 成功：`{"algorithm": ..., <结果字段>, "success": true}`
//! - 失败：`{"algorithm": ..., "error": ..., "success": false}`
//! - 未知算法：`{"error": "Unknown algorithm: <name>"}`

use super::coloring::{self, Coloring, ColoringOrder};
use super::connectivity::{self, Components};
use super::facility::{self, FacilityAssignment, Placement};
use super::mst::{self, SpanningTree};
use super::shortest_path::{self, ShortestPaths};
use super::tsp::{self, Tour};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::VertexId;
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, warn};

/// 算法标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    Tsp,
    Mst,
    Connectivity,
    Coloring,
    Hotel,
}

impl Algorithm {
    /// 全部算法，按固定顺序
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Dijkstra,
        Algorithm::Tsp,
        Algorithm::Mst,
        Algorithm::Connectivity,
        Algorithm::Coloring,
        Algorithm::Hotel,
    ];

    /// 调度使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Tsp => "tsp",
            Algorithm::Mst => "mst",
            Algorithm::Connectivity => "connectivity",
            Algorithm::Coloring => "coloring",
            Algorithm::Hotel => "hotel",
        }
    }

    /// 结果中的 `algorithm` 字段
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Tsp => "TSP (Nearest Neighbor)",
            Algorithm::Mst => "MST (Kruskal)",
            Algorithm::Connectivity => "Connectivity (DFS)",
            Algorithm::Coloring => "Graph Coloring (Greedy)",
            Algorithm::Hotel => "Hotel Optimization (K-Centers)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// 调度选项，默认值对应各算法的基本行为
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Dijkstra 起点，缺省为第一个顶点
    pub start: Option<VertexId>,
    /// TSP 结果再做 2-opt 改进
    pub two_opt: bool,
    pub coloring: ColoringOrder,
    pub placement: Placement,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: VertexId) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_two_opt(mut self, enabled: bool) -> Self {
        self.two_opt = enabled;
        self
    }

    pub fn with_coloring(mut self, order: ColoringOrder) -> Self {
        self.coloring = order;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

/// 各算法的结果
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    ShortestPaths(ShortestPaths),
    Tour(Tour),
    SpanningTree(SpanningTree),
    Components(Components),
    Coloring(Coloring),
    Facility(FacilityAssignment),
}

/// 一次调度的结果
#[derive(Debug, Clone)]
pub enum AlgorithmResult {
    Success {
        algorithm: Algorithm,
        outcome: Outcome,
    },
    Failure {
        algorithm: Algorithm,
        error: String,
    },
    /// 名称无法识别
    Unknown { name: String },
}

impl AlgorithmResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AlgorithmResult::Success { .. })
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            AlgorithmResult::Success { algorithm, .. } | AlgorithmResult::Failure { algorithm, .. } => {
                Some(*algorithm)
            }
            AlgorithmResult::Unknown { .. } => None,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            AlgorithmResult::Success { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// 错误信息，成功时为 None
    pub fn error_message(&self) -> Option<String> {
        match self {
            AlgorithmResult::Success { .. } => None,
            AlgorithmResult::Failure { error, .. } => Some(error.clone()),
            AlgorithmResult::Unknown { name } => {
                Some(Error::UnknownAlgorithm(name.clone()).to_string())
            }
        }
    }

    /// 转换为 JSON 值
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// 格式化的 JSON 字符串
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Serialize)]
struct SuccessView<'a> {
    algorithm: &'static str,
    #[serde(flatten)]
    outcome: &'a Outcome,
    success: bool,
}

#[derive(Serialize)]
struct FailureView<'a> {
    algorithm: &'static str,
    error: &'a str,
    success: bool,
}

#[derive(Serialize)]
struct UnknownView {
    error: String,
}

impl Serialize for AlgorithmResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            AlgorithmResult::Success { algorithm, outcome } => SuccessView {
                algorithm: algorithm.display_name(),
                outcome,
                success: true,
            }
            .serialize(serializer),
            AlgorithmResult::Failure { algorithm, error } => FailureView {
                algorithm: algorithm.display_name(),
                error,
                success: false,
            }
            .serialize(serializer),
            AlgorithmResult::Unknown { name } => UnknownView {
                error: Error::UnknownAlgorithm(name.clone()).to_string(),
            }
            .serialize(serializer),
        }
    }
}

/// 以默认选项按名称运行算法
pub fn run(name: &str, graph: &Graph) -> AlgorithmResult {
    run_with(name, graph, &RunOptions::default())
}

/// 按名称运行算法
pub fn run_with(name: &str, graph: &Graph, options: &RunOptions) -> AlgorithmResult {
    match name.parse::<Algorithm>() {
        Ok(algorithm) => execute(algorithm, graph, options),
        Err(_) => {
            warn!(name, "unknown algorithm");
            AlgorithmResult::Unknown {
                name: name.to_string(),
            }
        }
    }
}

/// 运行指定算法
pub fn execute(algorithm: Algorithm, graph: &Graph, options: &RunOptions) -> AlgorithmResult {
    let started = Instant::now();
    let result = compute(algorithm, graph, options);
    debug!(
        algorithm = algorithm.as_str(),
        elapsed_us = started.elapsed().as_micros() as u64,
        ok = result.is_ok(),
        "algorithm finished"
    );

    match result {
        Ok(outcome) => AlgorithmResult::Success { algorithm, outcome },
        Err(e) => {
            warn!(algorithm = algorithm.as_str(), error = %e, "algorithm rejected input");
            AlgorithmResult::Failure {
                algorithm,
                error: e.to_string(),
            }
        }
    }
}

/// 并行运行全部算法，结果顺序与 [`Algorithm::ALL`] 一致
///
/// 各算法只读共享的图，互不依赖。
pub fn run_all(graph: &Graph, options: &RunOptions) -> Vec<AlgorithmResult> {
    Algorithm::ALL[..]
        .par_iter()
        .map(|&algorithm| execute(algorithm, graph, options))
        .collect()
}

fn compute(algorithm: Algorithm, graph: &Graph, options: &RunOptions) -> Result<Outcome> {
    let outcome = match algorithm {
        Algorithm::Dijkstra => Outcome::ShortestPaths(shortest_path::dijkstra(graph, options.start)?),
        Algorithm::Tsp if options.two_opt => Outcome::Tour(tsp::nearest_neighbor_two_opt(graph)?),
        Algorithm::Tsp => Outcome::Tour(tsp::nearest_neighbor(graph)?),
        Algorithm::Mst => Outcome::SpanningTree(mst::kruskal(graph)?),
        Algorithm::Connectivity => Outcome::Components(connectivity::components(graph)?),
        Algorithm::Coloring => Outcome::Coloring(coloring::color_with(graph, options.coloring)?),
        Algorithm::Hotel => Outcome::Facility(facility::place(graph, options.placement)?),
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_graph() -> Graph {
        Graph::from_parts([0, 1, 2, 3], [(0, 1), (1, 2), (2, 3)])
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("mst".parse::<Algorithm>().unwrap(), Algorithm::Mst);
        assert_eq!("hotel".parse::<Algorithm>().unwrap(), Algorithm::Hotel);
        assert!("MST".parse::<Algorithm>().is_err());
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_path_graph_dijkstra_json() {
        let result = run("dijkstra", &create_test_graph());
        assert!(result.is_success());
        assert_eq!(
            result.to_json().unwrap(),
            json!({
                "algorithm": "Dijkstra",
                "distances": {"0": 0.0, "1": 1.0, "2": 2.0, "3": 3.0},
                "parent": {"0": -1, "1": 0, "2": 1, "3": 2},
                "start": 0,
                "success": true
            })
        );
    }

    #[test]
    fn test_path_graph_mst_and_connectivity() {
        let graph = create_test_graph();

        let mst = run("mst", &graph).to_json().unwrap();
        assert_eq!(mst["algorithm"], "MST (Kruskal)");
        assert_eq!(mst["num_edges"], 3);
        assert_eq!(mst["total_weight"], 3.0);
        assert_eq!(mst["is_connected"], true);

        let conn = run("connectivity", &graph).to_json().unwrap();
        assert_eq!(conn["components"], json!([[0, 1, 2, 3]]));
        assert_eq!(conn["success"], true);
    }

    #[test]
    fn test_success_key_order() {
        let text = serde_json::to_string(&run("coloring", &create_test_graph())).unwrap();
        assert!(text.starts_with("{\"algorithm\":\"Graph Coloring (Greedy)\""));
        assert!(text.ends_with("\"success\":true}"));
    }

    #[test]
    fn test_empty_graph() {
        let empty = Graph::new();
        for algorithm in Algorithm::ALL {
            let result = run(algorithm.as_str(), &empty);
            let json = result.to_json().unwrap();
            if algorithm == Algorithm::Dijkstra {
                assert!(result.is_success());
                assert_eq!(json["distances"], json!({}));
                assert_eq!(json["parent"], json!({}));
                assert_eq!(json["start"], 0);
            } else {
                assert_eq!(
                    json,
                    json!({
                        "algorithm": algorithm.display_name(),
                        "error": "Empty graph",
                        "success": false
                    })
                );
            }
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        let result = run("pagerank", &create_test_graph());
        assert!(!result.is_success());
        assert_eq!(result.algorithm(), None);
        assert_eq!(
            result.to_json().unwrap(),
            json!({"error": "Unknown algorithm: pagerank"})
        );
        assert_eq!(
            result.error_message().as_deref(),
            Some("Unknown algorithm: pagerank")
        );
    }

    #[test]
    fn test_malformed_edge_is_failure() {
        let graph = Graph::from_parts([0, 1], [(0, 7)]);
        for algorithm in Algorithm::ALL {
            let result = execute(algorithm, &graph, &RunOptions::default());
            assert!(!result.is_success(), "{} accepted a dangling edge", algorithm);
        }
    }

    #[test]
    fn test_negative_weight_rejected_by_dijkstra_only() {
        let graph = Graph::from_parts([0, 1, 2], [(0, 1, -2.0), (1, 2, 1.0)]);
        assert!(!run("dijkstra", &graph).is_success());
        assert!(run("mst", &graph).is_success());
    }

    #[test]
    fn test_options() {
        let graph = create_test_graph();
        let options = RunOptions::new()
            .with_start(3)
            .with_two_opt(true)
            .with_coloring(ColoringOrder::WelshPowell)
            .with_placement(Placement::DominatingSet);

        let json = run_with("dijkstra", &graph, &options).to_json().unwrap();
        assert_eq!(json["start"], 3);
        assert_eq!(json["distances"]["0"], 3.0);

        let hotel = run_with("hotel", &graph, &options);
        assert!(hotel.is_success());
    }

    #[test]
    fn test_disconnected_infinity_in_json() {
        let graph = Graph::from_parts([0, 1, 2], [(0, 1)]);
        let json = run("dijkstra", &graph).to_json().unwrap();
        assert_eq!(json["distances"]["2"], "Infinity");
        assert_eq!(json["parent"]["2"], -1);
    }

    #[test]
    fn test_run_all_order() {
        let results = run_all(&create_test_graph(), &RunOptions::default());
        let names: Vec<_> = results.iter().filter_map(AlgorithmResult::algorithm).collect();
        assert_eq!(names, Algorithm::ALL.to_vec());
        assert!(results.iter().all(AlgorithmResult::is_success));
    }
}
