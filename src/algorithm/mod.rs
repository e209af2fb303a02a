//! 图算法模块
//!
//! 六个算法彼此独立，每次调用都从 [`Graph`](crate::graph::Graph) 重新构建自己的邻接视图。
//! [`run`] 按名称调度并返回统一形状的结果。

pub mod coloring;
pub mod connectivity;
pub mod dispatch;
pub mod facility;
pub mod mst;
pub mod shortest_path;
pub mod tsp;
mod union_find;

pub use coloring::{Coloring, ColoringOrder};
pub use connectivity::Components;
pub use dispatch::{run, run_all, run_with, Algorithm, AlgorithmResult, Outcome, RunOptions};
pub use facility::{FacilityAssignment, Placement};
pub use mst::SpanningTree;
pub use shortest_path::{Path, ShortestPaths};
pub use tsp::Tour;
pub use union_find::UnionFind;
