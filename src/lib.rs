//! graphkit - 无向带权图算法引擎
//!
//! 对调用方提供的顶点/边集合计算经典图论结果：
//! - 单源最短路径（Dijkstra）
//! - 旅行商近似巡回（最近邻，可选 2-opt）
//! - 最小生成树（Kruskal + 并查集）
//! - 连通分量（迭代 DFS）
//! - 贪心顶点着色
//! - 设施选址（贪心 k-center）
//!
//! 引擎无状态：每次调用从 [`Graph`] 重新构建邻接视图，结果是独立的数据。
//! [`run`] 按名称调度，空图、非法输入和未知名称都以结果数据返回。

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{run, run_with, Algorithm, AlgorithmResult, RunOptions};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId};
pub use types::Weight;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
