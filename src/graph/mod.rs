//! 图模型模块
//!
//! 定义顶点、边、图以及各算法共用的邻接视图构建

mod adjacency;
mod edge;
mod graph;

pub use adjacency::{Adjacency, NeighborSets};
pub use edge::Edge;
pub use graph::Graph;
pub use crate::types::VertexId;
