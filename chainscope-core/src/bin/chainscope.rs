use anyhow::{anyhow, Context, Result};
use chainscope_core::{init_inspector, Inspection, InspectorError};
use std::env;
use std::process;

const USAGE: &str = "Usage:
  chainscope [--json] <address> [chain]
  chainscope [--json] --audit <address>

Chains: BASE (default), POLYGON, BNB, ETH, ARBITRUM";

enum Command {
    Inspect { address: String, chain: Option<String> },
    Audit { address: String },
}

fn parse_args(args: &[String]) -> Result<(Command, bool)> {
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| arg.as_str() != "--json").collect();

    let command = match positional.as_slice() {
        [flag, address] if flag.as_str() == "--audit" => Command::Audit {
            address: address.to_string(),
        },
        [address] if !address.starts_with("--") => Command::Inspect {
            address: address.to_string(),
            chain: None,
        },
        [address, chain] if !address.starts_with("--") => Command::Inspect {
            address: address.to_string(),
            chain: Some(chain.to_string()),
        },
        _ => return Err(anyhow!("{}", USAGE)),
    };

    Ok((command, json))
}

fn print_inspections(inspections: &[Inspection], json: bool) -> Result<()> {
    if json {
        let output = match inspections {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{}", output);
        return Ok(());
    }

    for inspection in inspections {
        println!("{}", inspection);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (command, json) = parse_args(&args)?;

    let inspector = init_inspector().context("Failed to initialize inspector")?;

    let result = match command {
        Command::Inspect { address, chain } => {
            let chain = match chain {
                Some(chain) => chain,
                None => inspector.current_chain().await.to_string(),
            };
            inspector.inspect(&chain, &address).await.map(|inspection| vec![inspection])
        }
        Command::Audit { address } => inspector.audit(&address).await,
    };

    match result {
        Ok(inspections) => print_inspections(&inspections, json),
        Err(e) if e.is_input_error() => exit_with_usage(&e),
        Err(e) => Err(e.into()),
    }
}

/// Bad chain or address input: report it with usage and exit 2.
fn exit_with_usage(error: &InspectorError) -> ! {
    eprintln!("{}\n\n{}", error, USAGE);
    process::exit(2)
}
