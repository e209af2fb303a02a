//! graphkit 命令行工具
//!
//! 加载图文件后运行单个算法，或进入交互模式

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use graphkit::algorithm::shortest_path::{bfs_path, find_path};
use graphkit::algorithm::{run_all, run_with, Algorithm, ColoringOrder, Placement, RunOptions};
use graphkit::cli::{format_weight, PrintMode, Printer};
use graphkit::graph::{Graph, VertexId};
use graphkit::import;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphkit-cli")]
#[command(about = "无向带权图算法命令行工具")]
struct Args {
    /// 图文件（.json 或边列表文本）
    #[arg(short, long)]
    input: PathBuf,

    /// 运行指定算法后退出（dijkstra, tsp, mst, connectivity, coloring, hotel, all）
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Dijkstra 起点
    #[arg(short, long)]
    start: Option<VertexId>,

    /// TSP 结果再做 2-opt 改进
    #[arg(long)]
    two_opt: bool,

    /// 着色顺序
    #[arg(long, value_enum, default_value = "greedy")]
    coloring: ColoringArg,

    /// 选址策略
    #[arg(long, value_enum, default_value = "k-center")]
    placement: PlacementArg,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    format: FormatArg,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColoringArg {
    Greedy,
    WelshPowell,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlacementArg {
    KCenter,
    DominatingSet,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Table,
    Vertical,
    Json,
}

impl Args {
    fn run_options(&self) -> RunOptions {
        let mut options = RunOptions::new()
            .with_two_opt(self.two_opt)
            .with_coloring(match self.coloring {
                ColoringArg::Greedy => ColoringOrder::VertexList,
                ColoringArg::WelshPowell => ColoringOrder::WelshPowell,
            })
            .with_placement(match self.placement {
                PlacementArg::KCenter => Placement::KCenter,
                PlacementArg::DominatingSet => Placement::DominatingSet,
            });
        if let Some(start) = self.start {
            options = options.with_start(start);
        }
        options
    }

    fn print_mode(&self) -> PrintMode {
        match self.format {
            FormatArg::Table => PrintMode::Table,
            FormatArg::Vertical => PrintMode::Vertical,
            FormatArg::Json => PrintMode::Json,
        }
    }
}

/// 交互会话状态
struct Session {
    graph: Graph,
    options: RunOptions,
    printer: Printer,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let graph = import::load(&args.input)
        .with_context(|| format!("无法加载图文件 {}", args.input.display()))?;

    let mut session = Session {
        graph,
        options: args.run_options(),
        printer: Printer::new(args.print_mode()),
    };

    // 单次运行模式
    if let Some(name) = args.algorithm.as_deref() {
        run_command(&session, name)?;
        return Ok(());
    }

    println!("graphkit CLI - 图算法分析");
    println!("=========================");
    println!("已加载: {}", args.input.display());
    println!("  顶点数: {}", session.graph.vertex_count());
    println!("  边数: {}", session.graph.edge_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("graphkit> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match handle_command(&mut session, line) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => println!("错误: {:#}", e),
        }
    }

    println!("再见！");
    Ok(())
}

fn handle_command(session: &mut Session, input: &str) -> anyhow::Result<bool> {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();

    match cmd.as_str() {
        "quit" | "exit" | "q" => return Ok(true),

        "help" | "h" | "?" => print_help(),

        "stats" | "info" => {
            print!("{}", session.printer.print_stats(&session.graph));
        }

        "run" => {
            if args.is_empty() {
                println!("用法: run <算法名>");
            } else {
                run_command(session, args)?;
            }
        }

        "all" => run_command(session, "all")?,

        "path" | "shortest" => {
            let ids: Vec<&str> = args.split_whitespace().collect();
            if ids.len() < 2 {
                println!("用法: path <起点 ID> <终点 ID>");
            } else if let (Ok(src), Ok(dst)) = (ids[0].parse::<VertexId>(), ids[1].parse::<VertexId>()) {
                match find_path(&session.graph, src, dst)? {
                    Some(path) => {
                        println!("路径: {:?}", path.vertices);
                        println!("边数: {}", path.hops());
                        println!("总权重: {}", format_weight(path.distance));
                    }
                    None => println!("未找到路径"),
                }
            } else {
                println!("无效的顶点 ID");
            }
        }

        "hops" => {
            let ids: Vec<&str> = args.split_whitespace().collect();
            if ids.len() < 2 {
                println!("用法: hops <起点 ID> <终点 ID>");
            } else if let (Ok(src), Ok(dst)) = (ids[0].parse::<VertexId>(), ids[1].parse::<VertexId>()) {
                match bfs_path(&session.graph, src, dst)? {
                    Some(path) => {
                        println!("路径: {:?}", path.vertices);
                        println!("边数: {}", path.hops());
                    }
                    None => println!("未找到路径"),
                }
            } else {
                println!("无效的顶点 ID");
            }
        }

        "start" => match args.parse::<VertexId>() {
            Ok(start) => {
                session.options.start = Some(start);
                println!("Dijkstra 起点设为 {}", start);
            }
            Err(_) => println!("用法: start <顶点 ID>"),
        },

        "format" => match args.parse::<PrintMode>() {
            Ok(mode) => session.printer.set_mode(mode),
            Err(e) => println!("{}", e),
        },

        _ => {
            // 直接输入算法名
            if cmd.parse::<Algorithm>().is_ok() {
                run_command(session, &cmd)?;
            } else {
                println!("未知命令: {}。输入 'help' 查看帮助。", cmd);
            }
        }
    }

    Ok(false)
}

fn run_command(session: &Session, name: &str) -> anyhow::Result<()> {
    let started = Instant::now();

    if name == "all" {
        let results = run_all(&session.graph, &session.options);
        let elapsed = started.elapsed().as_millis() as u64;
        if session.printer.mode() == PrintMode::Json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            for result in &results {
                println!("{}", session.printer.print_result(result, elapsed));
            }
        }
        return Ok(());
    }

    let result = run_with(name, &session.graph, &session.options);
    let elapsed = started.elapsed().as_millis() as u64;
    print!("{}", session.printer.print_result(&result, elapsed));

    if result.algorithm().is_none() {
        bail!("可用算法: {}", algorithm_names());
    }
    Ok(())
}

fn algorithm_names() -> String {
    Algorithm::ALL
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help() {
    println!(
        "
═══════════════════════════════════════════════════════════════
                   graphkit CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?           显示帮助
  quit, exit, q        退出程序
  stats, info          显示图统计信息

  run <算法>           运行算法，也可以直接输入算法名
                       算法: {}
                       示例: run mst

  all                  并行运行全部算法

  path <起点> <终点>   查找最短路径
                       示例: path 0 5

  hops <起点> <终点>   查找边数最少的路径（忽略权重）

  start <ID>           设置 Dijkstra 起点
  format <模式>        输出格式: table, vertical, json

═══════════════════════════════════════════════════════════════
",
        algorithm_names()
    );
}
