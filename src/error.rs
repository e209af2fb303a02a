//! 错误类型定义

use crate::types::{VertexId, Weight};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 图中没有任何顶点
    #[error("Empty graph")]
    EmptyGraph,

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// 边的端点或请求的顶点不在顶点列表中
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边 ({u}, {v}) 的权重无效: {weight}（Dijkstra 要求非负权重）")]
    NegativeWeight { u: VertexId, v: VertexId, weight: Weight },

    #[error("图规模过大: {vertices} 个顶点，精确算法上限为 {limit}")]
    TooLarge { vertices: usize, limit: usize },

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
