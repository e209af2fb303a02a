//! 结果打印器
//!
//! 提供表格、垂直和 JSON 三种格式的结果输出

use crate::algorithm::{AlgorithmResult, Outcome};
use crate::graph::Graph;
use crate::types::{VertexId, Weight};
use prettytable::{format, row, Cell, Row, Table};
use std::str::FromStr;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
    /// 原样输出 JSON
    Json,
}

impl FromStr for PrintMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(PrintMode::Table),
            "vertical" => Ok(PrintMode::Vertical),
            "json" => Ok(PrintMode::Json),
            other => Err(format!("未知输出格式: {}", other)),
        }
    }
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印一次调度的结果
    pub fn print_result(&self, result: &AlgorithmResult, execution_time_ms: u64) -> String {
        if self.mode == PrintMode::Json {
            return match result.to_json_pretty() {
                Ok(text) => format!("{}\n", text),
                Err(e) => format!("ERROR: {}\n", e),
            };
        }

        let title = result
            .algorithm()
            .map(|a| a.display_name())
            .unwrap_or("?");

        let outcome = match (result.outcome(), result.error_message()) {
            (Some(outcome), _) => outcome,
            (None, message) => {
                return format!(
                    "{}: ERROR {}\n",
                    title,
                    message.unwrap_or_default()
                );
            }
        };

        let (columns, rows) = tabulate(outcome);
        let body = if rows.is_empty() {
            "Empty set\n".to_string()
        } else {
            match self.mode {
                PrintMode::Vertical => self.format_vertical(&columns, &rows),
                _ => self.format_table(&columns, &rows),
            }
        };

        format!(
            "{}\n{}{}\n{} row(s) in set ({} ms)\n",
            title,
            body,
            summary(outcome),
            rows.len(),
            execution_time_ms
        )
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印图统计信息
    pub fn print_stats(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.add_row(row!["Total Weight", format_weight(graph.total_weight())]);
        table.to_string()
    }
}

/// 距离的显示形式，无穷大显示为 ∞
pub fn format_weight(value: Weight) -> String {
    if value.is_infinite() && value.is_sign_positive() {
        "∞".to_string()
    } else {
        value.to_string()
    }
}

fn format_vertices(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// 把结果展开成列和行
fn tabulate(outcome: &Outcome) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    match outcome {
        Outcome::ShortestPaths(paths) => (
            columns(&["vertex", "distance", "parent", "path"]),
            paths
                .distances
                .iter()
                .map(|(&v, &d)| {
                    let parent = match paths.parent.get(&v) {
                        Some(Some(p)) => p.to_string(),
                        _ => "-1".to_string(),
                    };
                    let path = paths
                        .path_to(v)
                        .map(|p| format_vertices(&p))
                        .unwrap_or_default();
                    vec![v.to_string(), format_weight(d), parent, path]
                })
                .collect(),
        ),
        Outcome::Tour(tour) => (
            columns(&["step", "vertex"]),
            tour.tour
                .iter()
                .enumerate()
                .map(|(i, v)| vec![i.to_string(), v.to_string()])
                .collect(),
        ),
        Outcome::SpanningTree(tree) => (
            columns(&["u", "v", "weight"]),
            tree.mst_edges
                .iter()
                .map(|(u, v, w)| vec![u.to_string(), v.to_string(), w.to_string()])
                .collect(),
        ),
        Outcome::Components(components) => (
            columns(&["component", "size", "vertices"]),
            components
                .components
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let members: Vec<String> = c.iter().map(|v| v.to_string()).collect();
                    vec![i.to_string(), c.len().to_string(), members.join(", ")]
                })
                .collect(),
        ),
        Outcome::Coloring(coloring) => (
            columns(&["vertex", "color"]),
            coloring
                .coloring
                .iter()
                .map(|(v, c)| vec![v.to_string(), c.to_string()])
                .collect(),
        ),
        Outcome::Facility(facility) => (
            columns(&["vertex", "center", "distance"]),
            facility
                .assignment
                .iter()
                .map(|(v, c)| {
                    let d = facility.distances.get(v).copied().unwrap_or(Weight::INFINITY);
                    vec![v.to_string(), c.to_string(), format_weight(d)]
                })
                .collect(),
        ),
    }
}

/// 结果摘要行
fn summary(outcome: &Outcome) -> String {
    match outcome {
        Outcome::ShortestPaths(paths) => {
            let reachable = paths.distances.values().filter(|d| d.is_finite()).count();
            format!("start: {}, reachable: {}/{}", paths.start, reachable, paths.distances.len())
        }
        Outcome::Tour(tour) => format!(
            "tour: {}, total_distance: {}, vertices_visited: {}",
            format_vertices(&tour.tour),
            format_weight(tour.total_distance),
            tour.vertices_visited
        ),
        Outcome::SpanningTree(tree) => format!(
            "total_weight: {}, num_edges: {}, is_connected: {}",
            tree.total_weight, tree.num_edges, tree.is_connected
        ),
        Outcome::Components(c) => format!(
            "num_components: {}, is_connected: {}, largest_component_size: {}",
            c.num_components, c.is_connected, c.largest_component_size
        ),
        Outcome::Coloring(c) => format!(
            "chromatic_number: {}, classes: {:?}",
            c.chromatic_number,
            c.classes()
        ),
        Outcome::Facility(f) => format!(
            "centers: {:?}, max_distance: {}, average_distance: {:.2}",
            f.centers,
            format_weight(f.max_distance),
            f.average_distance()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::run;

    fn create_test_graph() -> Graph {
        Graph::from_parts([0, 1, 2, 3], [(0, 1), (1, 2), (2, 3)])
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("table".parse::<PrintMode>().unwrap(), PrintMode::Table);
        assert_eq!("JSON".parse::<PrintMode>().unwrap(), PrintMode::Json);
        assert!("xml".parse::<PrintMode>().is_err());
    }

    #[test]
    fn test_table_output() {
        let printer = Printer::default();
        let output = printer.print_result(&run("mst", &create_test_graph()), 1);
        assert!(output.starts_with("MST (Kruskal)\n"));
        assert!(output.contains("total_weight: 3, num_edges: 3, is_connected: true"));
        assert!(output.contains("3 row(s) in set (1 ms)"));
    }

    #[test]
    fn test_vertical_output() {
        let printer = Printer::new(PrintMode::Vertical);
        let output = printer.print_result(&run("coloring", &create_test_graph()), 0);
        assert!(output.contains("*************************** 4. row"));
        assert!(output.contains("chromatic_number: 2, classes: [[0, 2], [1, 3]]"));
    }

    #[test]
    fn test_json_output() {
        let printer = Printer::new(PrintMode::Json);
        let output = printer.print_result(&run("pagerank", &create_test_graph()), 0);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["error"], "Unknown algorithm: pagerank");
    }

    #[test]
    fn test_error_output() {
        let printer = Printer::default();
        let output = printer.print_result(&run("tsp", &Graph::new()), 0);
        assert_eq!(output, "TSP (Nearest Neighbor): ERROR Empty graph\n");
    }

    #[test]
    fn test_infinite_distance() {
        let graph = Graph::from_parts([0, 1], Vec::<(VertexId, VertexId)>::new());
        let output = Printer::default().print_result(&run("dijkstra", &graph), 0);
        assert!(output.contains('∞'));
        assert!(output.contains("reachable: 1/2"));
    }

    #[test]
    fn test_stats() {
        let output = Printer::default().print_stats(&create_test_graph());
        assert!(output.contains("Vertex Count"));
        assert!(output.contains("Total Weight"));
    }
}
