//! Notification Peek CLI
//!
//! 判断通知何时值得再次展示 (变更检测、通话状态、SIM 锁定)

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use notification_peek::{
    display_body, display_decision, is_sim_panel_showing, slot_descriptor, CallMonitor, CallState,
    NotificationSnapshot, PeekSettings, SimState,
};

#[derive(Parser)]
#[command(name = "npeek")]
#[command(about = "Notification Peek - 判断通知何时值得再次展示")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 比对新旧两份通知快照，判断是否需要重新展示
    ///
    /// 退出码: 0 = 展示, 1 = 抑制, 2 = 快照读取失败
    Compare {
        /// 旧快照 JSON 文件
        old: PathBuf,
        /// 新快照 JSON 文件
        new: PathBuf,
        /// 输出 JSON 格式
        #[arg(long)]
        json: bool,
    },
    /// 提取通知的展示正文
    Content {
        /// 快照 JSON 文件
        file: PathBuf,
        /// 输出 JSON 格式
        #[arg(long)]
        json: bool,
    },
    /// 打印通知的槽位描述符 (包名|id|tag)
    Describe {
        /// 快照 JSON 文件
        file: PathBuf,
    },
    /// 从 stdin 持续读取通话状态，跟踪占线标志
    CallWatch,
    /// 查询指定 SIM 状态下解锁面板是否显示
    Sim {
        /// SIM 状态 (名称或原始数值，如 pin_required / 2)
        state: String,
        /// 输出 JSON 格式
        #[arg(long)]
        json: bool,
    },
    /// 查看当前 peek 偏好设置
    Settings {
        /// 输出 JSON 格式
        #[arg(long)]
        json: bool,
    },
}

fn load_snapshot(path: &Path, label: &str) -> NotificationSnapshot {
    match NotificationSnapshot::load(path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("读取{}快照失败: {}", label, e);
            std::process::exit(2);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化 tracing 日志系统
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug npeek compare old.json new.json
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notification_peek=info,npeek=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { old, new, json } => {
            let old_snapshot = load_snapshot(&old, "旧");
            let new_snapshot = load_snapshot(&new, "新");

            let decision = display_decision(&old_snapshot, &new_snapshot);

            if json {
                let payload = serde_json::json!({
                    "slot": slot_descriptor(&new_snapshot),
                    "decision": decision,
                    "should_display": decision.should_display(),
                    "posted_at": new_snapshot.posted_at(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("槽位: {}", slot_descriptor(&new_snapshot));
                if let Some(posted_at) = new_snapshot.posted_at() {
                    println!("发布时间: {}", posted_at);
                }
                println!("判定: {}", decision);
                if decision.should_display() {
                    println!("🔔 需要重新展示");
                } else {
                    println!("🔕 抑制重复展示");
                }
            }

            if !decision.should_display() {
                std::process::exit(1);
            }
        }
        Commands::Content { file, json } => {
            let snapshot = load_snapshot(&file, "");
            let body = display_body(&snapshot);

            if json {
                let payload = serde_json::json!({
                    "slot": slot_descriptor(&snapshot),
                    "body": body,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                // 多行正文自带换行，避免重复追加
                print!("{}", body);
                if !body.ends_with('\n') {
                    println!();
                }
            }
        }
        Commands::Describe { file } => {
            let snapshot = load_snapshot(&file, "");
            println!("{}", slot_descriptor(&snapshot));
        }
        Commands::CallWatch => {
            let monitor = CallMonitor::new();
            println!("从 stdin 读取通话状态 (idle/ringing/offhook 或数值)，Ctrl-D 结束");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match trimmed.parse::<CallState>() {
                    Ok(state) => {
                        monitor.on_call_state_changed(state);
                        if monitor.is_ringing_or_connected() {
                            println!("📞 {} -> 占线", state);
                        } else {
                            println!("✅ {} -> 空闲", state);
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", e);
                    }
                }
            }
        }
        Commands::Sim { state, json } => {
            let sim = match state.parse::<SimState>() {
                Ok(sim) => sim,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(2);
                }
            };
            let showing = is_sim_panel_showing(sim);

            if json {
                let payload = serde_json::json!({
                    "state": sim.as_str(),
                    "panel_showing": showing,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if showing {
                println!("🔒 SIM 解锁面板正在显示 ({})", sim);
            } else {
                println!("SIM 解锁面板未显示 ({})", sim);
            }
        }
        Commands::Settings { json } => {
            let settings = PeekSettings::load();

            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else if settings.disable_peek {
                println!("🔕 peek 已停用");
            } else {
                println!("🔔 peek 已启用");
            }
        }
    }

    Ok(())
}
