// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! traffic-capture CLI
//!
//! Replays recorded browser captures through the capture pipeline and
//! prints the resulting events as JSON lines.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use traffic_capture::capture::{read_records, replay_to, SinkChain, TracingSink};
use traffic_capture::{CaptureConfig, CaptureService, ErrorContext};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("traffic_capture=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "replay" => {
            if args.len() < 3 {
                eprintln!("Usage: traffic-capture replay <file> [--verbose]");
                return ExitCode::from(1);
            }
            let verbose = args[3..].iter().any(|a| a == "--verbose" || a == "-V");
            replay_file(&args[2], verbose).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("traffic-capture {}", traffic_capture::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"traffic-capture - Browser traffic capture pipeline

USAGE:
    traffic-capture <COMMAND> [OPTIONS]

COMMANDS:
    replay <file>    Replay a JSON-lines capture file and print events
    help             Show this help message
    version          Show version information

OPTIONS:
    --verbose, -V    Log captured headers and bodies (replay)

RECORD FORMAT (one JSON object per line):
    {{"kind":"request","requestId":"1","url":"https://example.com/","method":"GET","timeStamp":1735464000000,"requestHeaders":[]}}
    {{"kind":"response","requestId":"1","response":{{"status":200,"statusText":"OK","headers":{{}}}}}}
    {{"kind":"error","requestId":"1","error":"Network timeout"}}

ENVIRONMENT:
    RUST_LOG         Log filter (default: traffic_capture=info)
"#
    );
}

async fn replay_file(path: &str, verbose: bool) -> ExitCode {
    let records = match read_records(path).await.context(&format!("Failed to read {}", path)) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let config = if verbose {
        CaptureConfig::verbose()
    } else {
        CaptureConfig::quiet()
    };
    let service = CaptureService::new(config);

    let mut sinks = SinkChain::new();
    sinks.add(TracingSink::default());

    let outcome = match replay_to(&service, records, &sinks).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Replay failed: {}", e);
            return ExitCode::from(1);
        }
    };

    for event in &outcome.events {
        match event.to_json() {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Failed to serialize event {}: {}", event.correlation_id(), e);
                return ExitCode::from(1);
            }
        }
    }

    if outcome.rejected > 0 {
        eprintln!("{} record(s) rejected", outcome.rejected);
    }

    ExitCode::SUCCESS
}
