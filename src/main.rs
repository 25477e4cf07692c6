use anyhow::Context;
use clap::Parser;
use pac_drills::config::cli::{Command, DsaCommand, SearchMethod, ShapeCommand, SortAlgorithm};
use pac_drills::config::toml_config::LogFormat;
use pac_drills::core::{array, demos, server, workers::SleepTask};
use pac_drills::domain::model::{ArrayReport, Person};
use pac_drills::dsa::shapes::{Circle, Rectangle, Shape};
use pac_drills::dsa::{anagram, linked_list::LinkedList, search, sort};
use pac_drills::utils::error::ErrorSeverity;
use pac_drills::utils::{logger, validation::Validate};
use pac_drills::{CliConfig, DrillError, DrillsConfig, WorkerPool};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = cli.resolve().with_context(|| match &cli.config {
        Some(path) => format!("failed to load config file '{}'", path),
        None => "failed to build default configuration".to_string(),
    })?;

    // 初始化日誌
    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(config.logging.verbose),
        LogFormat::Json => logger::init_json_logger(config.logging.verbose),
    }

    tracing::info!("Starting pac-drills");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: &Command, config: &DrillsConfig) -> pac_drills::Result<()> {
    match command {
        Command::Array { json, .. } => run_array(config.array.count, *json),
        Command::Serve { .. } => server::run(&config.server).await,
        Command::Workers { json, .. } => {
            let pool = WorkerPool::from_config(&config.workers)?;
            let reports = pool
                .run(Arc::new(SleepTask::new(config.workers.duration())))
                .await?;
            if *json {
                print_json(&reports)?;
            }
            Ok(())
        }
        Command::Greet { names } => demos::greet_all(names).await.map(|_| ()),
        Command::Bakery { .. } => demos::bakery(&config.bakery).await.map(|_| ()),
        Command::Person { name, age } => {
            println!("{}", Person::new(name.clone(), *age).greeting());
            Ok(())
        }
        Command::Dsa { command } => run_dsa(command),
    }
}

fn run_array(count: usize, json: bool) -> pac_drills::Result<()> {
    if !json {
        print!("{}", array::prompt(count));
        std::io::stdout().flush()?;
    }

    let values = array::read_integers(std::io::stdin().lock(), count)?;
    tracing::debug!("Read {} integers", values.len());
    let report = ArrayReport::from_values(values)?;

    if json {
        print_json(&report)
    } else {
        println!("{}", report.render());
        Ok(())
    }
}

fn run_dsa(command: &DsaCommand) -> pac_drills::Result<()> {
    match command {
        DsaCommand::Search {
            target,
            method,
            values,
        } => {
            let found = match method {
                SearchMethod::Linear => search::linear(values, target),
                SearchMethod::Binary => {
                    if values.windows(2).any(|w| w[0] > w[1]) {
                        return Err(DrillError::input(
                            "binary search needs values in ascending order",
                        ));
                    }
                    search::binary(values, target)
                }
            };
            match found {
                Some(index) => println!("found {} at index {}", target, index),
                None => println!("{} not found", target),
            }
        }
        DsaCommand::Sort { algorithm, values } => {
            let sorted = match algorithm {
                SortAlgorithm::Selection => sort::selection(values),
                SortAlgorithm::Quick => sort::quick(values),
                SortAlgorithm::Merge => sort::merge(values),
            };
            println!("Sorted array: {:?}", sorted);
        }
        DsaCommand::Anagram { first, second } => {
            if anagram::is_anagram(first, second) {
                println!("This is anagram");
            } else {
                println!("This is not anagram");
            }
        }
        DsaCommand::Reverse { values } => {
            let mut list: LinkedList<&str> = values.iter().map(String::as_str).collect();
            println!("{}", list);
            list.reverse();
            println!("{}", list);
        }
        DsaCommand::Area { shape } => {
            let area = match shape {
                ShapeCommand::Rectangle { height, width } => {
                    Rectangle::new(*height, *width)?.area()
                }
                ShapeCommand::Circle { radius } => Circle::new(*radius)?.area(),
            };
            println!("Area: {:.2}", area);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> pac_drills::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
