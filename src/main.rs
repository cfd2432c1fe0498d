use std::env;
use std::io::Read;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use rbac_admin::validation::{check_json, KINDS};
use rbac_admin::{ApiResponse, Config};

fn print_usage() {
    println!("Usage: rbac-admin -kind <kind> [OPTIONS]");
    println!("Validate a JSON request body and print the response envelope.");
    println!("Options:");
    println!("  -config <path>  Path to configuration file (default: ./etc/rbac-admin.toml)");
    println!("  -kind <kind>    Request kind, e.g. user.create (see -kinds)");
    println!("  -file <path>    Read the body from a file instead of stdin");
    println!("  -kinds          List supported request kinds");
    println!("  -help, --help   Print this help message");
}

/// Value following `flag`, if any
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .skip_while(|arg| arg.as_str() != flag)
        .nth(1)
        .map(|s| s.to_string())
}

fn main() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-help" || arg == "--help") {
        print_usage();
        return Ok(ExitCode::SUCCESS);
    }
    if args.iter().any(|arg| arg == "-kinds") {
        for kind in KINDS {
            println!("{}", kind);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config_path =
        arg_value(&args, "-config").unwrap_or_else(|| "./etc/rbac-admin.toml".to_string());

    // Load configuration first (before logging init)
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Could not load config file: {}, using defaults", e);
        Config::default()
    });

    // Priority: RUST_LOG env var > config file > default "info"
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let Some(kind) = arg_value(&args, "-kind") else {
        print_usage();
        return Ok(ExitCode::FAILURE);
    };

    let body = match arg_value(&args, "-file") {
        Some(path) => {
            info!("Reading request body from: {}", path);
            std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path, e))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let (response, code) = match check_json(&kind, &body, &config) {
        Ok(()) => (ApiResponse::<()>::success_msg("校验通过"), ExitCode::SUCCESS),
        Err(err) => {
            tracing::warn!(kind = %kind, error = %err, "request rejected");
            (ApiResponse::<()>::from_error(&err), ExitCode::FAILURE)
        }
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(code)
}
