//! 通用类型定义

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 顶点 ID（非负整数，通常取值于 `[0, N)`）
pub type VertexId = u64;

/// 边权重 / 距离
pub type Weight = f64;

/// 未指定权重时的默认值
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// 前驱不存在时在输出中使用的哨兵值
pub const NO_PARENT: i64 = -1;

/// 按顶点列表顺序排列的顶点映射
pub type VertexMap<T> = IndexMap<VertexId, T>;

/// 四舍五入到两位小数
pub fn round2(value: Weight) -> Weight {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}

/// 可能为无穷大的距离，序列化时无穷大写作字符串
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(pub Weight);

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_helpers::distance(&self.0, serializer)
    }
}

/// 结果序列化辅助函数
pub mod serde_helpers {
    use super::*;

    /// 有限值按数字输出，非有限值输出为 "Infinity" / "-Infinity" / "NaN"
    pub fn distance<S: Serializer>(value: &Weight, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    pub fn distance_map<S: Serializer>(
        map: &VertexMap<Weight>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (vertex, value) in map {
            out.serialize_entry(vertex, &Distance(*value))?;
        }
        out.end()
    }

    /// 缺失的前驱输出为 -1
    pub fn parent_map<S: Serializer>(
        map: &VertexMap<Option<VertexId>>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (vertex, parent) in map {
            let parent = parent.map(|p| p as i64).unwrap_or(NO_PARENT);
            out.serialize_entry(vertex, &parent)?;
        }
        out.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.005 + 0.001), 2.01);
        assert_eq!(round2(7.0), 7.0);
        assert!(round2(Weight::INFINITY).is_infinite());
    }

    #[test]
    fn test_distance_serialization() {
        assert_eq!(serde_json::to_string(&Distance(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&Distance(Weight::INFINITY)).unwrap(),
            "\"Infinity\""
        );
    }

    #[test]
    fn test_parent_map_sentinel() {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serde_helpers::parent_map")]
            parent: VertexMap<Option<VertexId>>,
        }

        let mut parent = VertexMap::new();
        parent.insert(0, None);
        parent.insert(1, Some(0));
        let json = serde_json::to_string(&Wrapper { parent }).unwrap();
        assert_eq!(json, r#"{"parent":{"0":-1,"1":0}}"#);
    }
}
