//! 边定义
//!
//! 无向带权边。`(u, v)` 与 `(v, u)` 表示同一条边。

use crate::types::{VertexId, Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};

/// 无向边
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "EdgeRepr")]
pub struct Edge {
    /// 端点 u
    pub u: VertexId,
    /// 端点 v
    pub v: VertexId,
    /// 权重（缺省为 1.0）
    pub weight: Weight,
}

impl Edge {
    /// 创建默认权重的边
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self::weighted(u, v, DEFAULT_WEIGHT)
    }

    /// 创建带权边
    pub fn weighted(u: VertexId, v: VertexId, weight: Weight) -> Self {
        Self { u, v, weight }
    }

}

impl From<(VertexId, VertexId)> for Edge {
    fn from((u, v): (VertexId, VertexId)) -> Self {
        Self::new(u, v)
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from((u, v, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::weighted(u, v, weight)
    }
}

/// 输入中允许的边写法：`[u, v]`、`[u, v, w]` 或 `{"u": .., "v": .., "weight": ..}`
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeRepr {
    Pair(VertexId, VertexId),
    Triple(VertexId, VertexId, Weight),
    Record {
        u: VertexId,
        v: VertexId,
        #[serde(default)]
        weight: Option<Weight>,
    },
}

impl From<EdgeRepr> for Edge {
    fn from(repr: EdgeRepr) -> Self {
        match repr {
            EdgeRepr::Pair(u, v) => Edge::new(u, v),
            EdgeRepr::Triple(u, v, w) => Edge::weighted(u, v, w),
            EdgeRepr::Record { u, v, weight } => {
                Edge::weighted(u, v, weight.unwrap_or(DEFAULT_WEIGHT))
            }
        }
    }
}
