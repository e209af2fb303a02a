//! 图数据导入模块
//!
//! 支持两种格式：
//! - JSON：`{"vertices": [...], "edges": [[u, v], [u, v, w], {"u": .., "v": .., "weight": ..}]}`
//! - 边列表文本：首行 `N M`，顶点为 `0..N`，随后 M 行 `u v [w]`
//!
//! 导入只负责构造 [`Graph`]，算法本身从不读取文件。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{VertexId, Weight};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 图文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    EdgeList,
}

impl GraphFormat {
    /// 按扩展名判断格式：`.json` 为 JSON，其余按边列表处理
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => GraphFormat::Json,
            _ => GraphFormat::EdgeList,
        }
    }
}

/// 加载图文件，按扩展名选择格式
pub fn load<P: AsRef<Path>>(path: P) -> Result<Graph> {
    match GraphFormat::from_path(&path) {
        GraphFormat::Json => load_json(path),
        GraphFormat::EdgeList => load_edge_list(path),
    }
}

/// 从 JSON 文件加载
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let text = fs::read_to_string(path.as_ref())?;
    let graph = parse_json(&text)?;
    debug!(
        path = %path.as_ref().display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded json graph"
    );
    Ok(graph)
}

/// 从边列表文件加载
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let text = fs::read_to_string(path.as_ref())?;
    let graph = parse_edge_list(&text)?;
    debug!(
        path = %path.as_ref().display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

/// 解析 JSON 文档
pub fn parse_json(text: &str) -> Result<Graph> {
    serde_json::from_str(text).map_err(|e| Error::Parse(format!("JSON 解析错误: {}", e)))
}

/// 解析边列表文本
///
/// 空行和以 `#` 开头的行被忽略。多余的边行是错误，缺少的也是。
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| Error::Parse("缺少首行 `N M`".to_string()))?;
    let header: Vec<&str> = header.split_whitespace().collect();
    if header.len() != 2 {
        return Err(Error::Parse(format!("第 {} 行: 首行应为 `N M`", line_no)));
    }
    let n: usize = parse_field(header[0], line_no, "顶点数")?;
    let m: usize = parse_field(header[1], line_no, "边数")?;

    let mut edges = Vec::with_capacity(m);
    for (line_no, line) in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let edge = match parts.as_slice() {
            [u, v] => Edge::new(
                parse_field(u, line_no, "顶点")?,
                parse_field(v, line_no, "顶点")?,
            ),
            [u, v, w] => Edge::weighted(
                parse_field(u, line_no, "顶点")?,
                parse_field(v, line_no, "顶点")?,
                parse_field::<Weight>(w, line_no, "权重")?,
            ),
            _ => {
                return Err(Error::Parse(format!(
                    "第 {} 行: 边应为 `u v [w]`",
                    line_no
                )))
            }
        };

        for endpoint in [edge.u, edge.v] {
            if endpoint >= n as VertexId {
                return Err(Error::Parse(format!(
                    "第 {} 行: 顶点 {} 超出范围 0..{}",
                    line_no, endpoint, n
                )));
            }
        }
        edges.push(edge);
    }

    if edges.len() != m {
        return Err(Error::Parse(format!(
            "首行声明 {} 条边，实际 {} 条",
            m,
            edges.len()
        )));
    }

    Ok(Graph {
        vertices: (0..n as VertexId).collect(),
        edges,
    })
}

fn parse_field<T: std::str::FromStr>(text: &str, line_no: usize, what: &str) -> Result<T> {
    text.parse()
        .map_err(|_| Error::Parse(format!("第 {} 行: 无效的{} `{}`", line_no, what, text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_json_mixed_edges() {
        let graph = parse_json(
            r#"{"vertices": [0, 1, 2, 3],
                "edges": [[0, 1], [1, 2, 2.5], {"u": 2, "v": 3}, {"u": 3, "v": 0, "weight": 4}]}"#,
        )
        .unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(
            graph.edges,
            vec![
                Edge::new(0, 1),
                Edge::weighted(1, 2, 2.5),
                Edge::new(2, 3),
                Edge::weighted(3, 0, 4.0),
            ]
        );
    }

    #[test]
    fn test_parse_json_without_edges() {
        let graph = parse_json(r#"{"vertices": [5]}"#).unwrap();
        assert_eq!(graph.vertices, vec![5]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_parse_json_error() {
        assert!(matches!(parse_json("{\"edges\": []}"), Err(Error::Parse(_))));
        assert!(matches!(parse_json("not json"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_edge_list() {
        let text = "# 示例\n4 3\n0 1\n1 2 2.5\n\n2 3 1\n";
        let graph = parse_edge_list(text).unwrap();
        assert_eq!(graph.vertices, vec![0, 1, 2, 3]);
        assert_eq!(graph.edges[0], Edge::new(0, 1));
        assert_eq!(graph.edges[1], Edge::weighted(1, 2, 2.5));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_parse_edge_list_errors() {
        assert!(parse_edge_list("").is_err());
        assert!(parse_edge_list("3\n").is_err());
        // 边数不符
        assert!(parse_edge_list("3 2\n0 1\n").is_err());
        // 顶点越界
        assert!(parse_edge_list("2 1\n0 2\n").is_err());
        // 权重无效
        assert!(parse_edge_list("2 1\n0 1 heavy\n").is_err());
    }

    #[test]
    fn test_load_by_extension() {
        let mut json = Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"vertices": [0, 1], "edges": [[0, 1, 3.0]]}}"#).unwrap();
        let graph = load(json.path()).unwrap();
        assert_eq!(graph.edges, vec![Edge::weighted(0, 1, 3.0)]);

        let mut text = Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(text, "2 1").unwrap();
        writeln!(text, "0 1 3.0").unwrap();
        assert_eq!(load(text.path()).unwrap(), graph);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load_json("/nonexistent/graph.json"), Err(Error::Io(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(GraphFormat::from_path("a/b.JSON"), GraphFormat::Json);
        assert_eq!(GraphFormat::from_path("input.txt"), GraphFormat::EdgeList);
        assert_eq!(GraphFormat::from_path("graph"), GraphFormat::EdgeList);
    }
}
