//! graphkit 演示脚本
//!
//! 生成随机几何图并依次运行全部算法

use graphkit::algorithm::tsp::{exact_tour, nearest_neighbor, two_opt};
use graphkit::algorithm::{run_with, Algorithm, RunOptions};
use graphkit::cli::{PrintMode, Printer};
use graphkit::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// 平面上随机撒点，距离小于 radius 的点对连边，权重为欧氏距离
fn random_geometric_graph(n: usize, radius: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();

    let mut graph = Graph::with_vertices(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < radius {
                graph.add_weighted_edge(i as u64, j as u64, (dist * 100.0).round() / 100.0);
            }
        }
    }
    graph
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("graphkit 演示");
    println!("=============\n");

    let graph = random_geometric_graph(10, 50.0, 7);
    let printer = Printer::new(PrintMode::Table);

    println!("1. 生成随机图");
    print!("{}", printer.print_stats(&graph));
    println!();

    println!("2. 运行全部算法\n");
    let options = RunOptions::default();
    for algorithm in Algorithm::ALL {
        let started = Instant::now();
        let result = run_with(algorithm.as_str(), &graph, &options);
        let elapsed = started.elapsed().as_millis() as u64;
        println!("{}", printer.print_result(&result, elapsed));
    }

    println!("3. TSP 启发式与精确解对比\n");
    let heuristic = nearest_neighbor(&graph)?;
    println!("   最近邻: {:?} 总长 {}", heuristic.tour, heuristic.total_distance);
    if heuristic.is_closed() {
        let improved = two_opt(&graph, &heuristic)?;
        println!("   2-opt:  {:?} 总长 {}", improved.tour, improved.total_distance);
    }
    let exact = exact_tour(&graph)?;
    println!("   精确:   {:?} 总长 {}", exact.tour, exact.total_distance);
    println!();

    println!("4. JSON 输出\n");
    let json = Printer::new(PrintMode::Json);
    print!("{}", json.print_result(&run_with("hotel", &graph, &options), 0));

    Ok(())
}
