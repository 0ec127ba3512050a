use super::args::*;
use nl2sql_core::config::{load_suite, write_sample_suite, ClientConfig};
use nl2sql_core::engine::runner::Runner;
use nl2sql_core::engine::scorer::Scorer;
use nl2sql_core::generator::SqlGenerator;
use nl2sql_core::model::EvalSuite;
use nl2sql_core::providers::llm::huggingface::HuggingFaceClient;
use nl2sql_core::report::console;
use nl2sql_core::retry::RetryPolicy;
use std::path::Path;
use std::sync::Arc;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd.unwrap_or(Command::Demo(GenerateArgs::default())) {
        Command::Demo(args) => cmd_evaluate(EvalSuite::demo(), args).await,
        Command::Run(args) => {
            let suite = match load_suite(&args.suite) {
                Ok(suite) => suite,
                Err(e) => {
                    eprintln!("config error: {}", e);
                    return Ok(exit_codes::CONFIG_ERROR);
                }
            };
            cmd_evaluate(suite, args.generate).await
        }
        Command::Init(args) => cmd_init(&args.suite),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

fn cmd_init(path: &Path) -> anyhow::Result<i32> {
    if path.exists() {
        eprintln!("note: {} already exists (skipped)", path.display());
        return Ok(exit_codes::OK);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_sample_suite(path)?;
    eprintln!("created {}", path.display());
    Ok(exit_codes::OK)
}

async fn cmd_evaluate(suite: EvalSuite, args: GenerateArgs) -> anyhow::Result<i32> {
    let Some(metric) = nl2sql_metrics::metric_by_name(&args.metric) else {
        eprintln!(
            "config error: unknown metric '{}' (expected loose|exact)",
            args.metric
        );
        return Ok(exit_codes::CONFIG_ERROR);
    };

    let mut cfg = match ClientConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };
    if let Some(url) = args.api_url {
        cfg.api_url = url;
    }
    if let Some(n) = args.max_retries {
        cfg.max_retries = n;
    }
    tracing::debug!(event = "nl2sql.cli.config", config = ?cfg);

    let client = HuggingFaceClient::new(&cfg)?;
    let generator =
        SqlGenerator::new(Arc::new(client)).with_policy(RetryPolicy::new(cfg.max_retries));
    let runner = Runner::new(generator, Scorer::new(metric));

    let json = args.json;
    let artifacts = runner
        .run_suite(&suite, |case, outcome| {
            if !json {
                console::print_case(case, outcome);
            }
        })
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&artifacts)?);
    } else {
        console::print_summary(&artifacts);
    }
    Ok(exit_codes::OK)
}
