//! CallDecode CLI — decode EVM calldata against an ABI from the terminal.
//!
//! # Commands
//! ```
//! calldecode decode    --abi <path.json> --data <hex> [--format jsObject|solidityType] [--json]
//! calldecode selectors --abi <path.json>
//! calldecode info
//! ```

use anyhow::{Context, Result};
use calldecode_core::{DecodeFormat, DecodedCall, DecodedParams, VALID_FORMATS};
use calldecode_evm::InputDataDecoder;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "calldecode",
    about = "EVM calldata decoder — CallDecode CLI",
    long_about = "
CallDecode CLI: decode transaction input data using an ABI JSON file.
Built on alloy-rs. Output is either a nested name-keyed object (jsObject)
or a flat type-annotated parameter list (solidityType).
",
    version
)]
struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode calldata using an ABI JSON file
    Decode {
        /// Path to the ABI JSON file
        #[arg(long)]
        abi: String,
        /// Raw calldata (0x-prefixed hex)
        #[arg(long, conflicts_with = "data_file")]
        data: Option<String>,
        /// Read calldata from a file instead
        #[arg(long)]
        data_file: Option<String>,
        /// Output format: jsObject or solidityType
        #[arg(long, default_value = "jsObject")]
        format: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List function names and 4-byte selectors in an ABI
    Selectors {
        /// Path to the ABI JSON file
        #[arg(long)]
        abi: String,
    },

    /// Show CallDecode build and capability info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Decode { abi, data, data_file, format, json } => {
            cmd_decode(&abi, data.as_deref(), data_file.as_deref(), &format, json)
        }
        Commands::Selectors { abi } => cmd_selectors(&abi),
        Commands::Info => cmd_info(),
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn cmd_decode(
    abi_path: &str,
    data: Option<&str>,
    data_file: Option<&str>,
    format: &str,
    as_json: bool,
) -> Result<()> {
    let calldata = match (data, data_file) {
        (Some(d), _) => d.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read calldata file '{path}'"))?,
        (None, None) => anyhow::bail!("either --data or --data-file is required"),
    };

    // Invalid names warn and fall back to jsObject rather than erroring.
    let format = DecodeFormat::from_name_or_default(format);
    let decoder = InputDataDecoder::from_abi_file(abi_path, format)
        .with_context(|| format!("failed to load ABI '{abi_path}'"))?;

    let Some(call) = decoder.decode_data(&calldata) else {
        anyhow::bail!("calldata did not decode against '{abi_path}'");
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&call)?);
    } else {
        print_call(&call);
    }
    Ok(())
}

fn print_call(call: &DecodedCall) {
    println!("method: {}", call.method_name);
    match &call.params {
        DecodedParams::Flat(params) => {
            for p in params {
                let name = if p.name.is_empty() { "<unnamed>" } else { &p.name };
                println!("  {name} ({}) = {}", p.solidity_type, p.value);
            }
        }
        DecodedParams::Nested(map) => {
            for (name, value) in map {
                let name = if name.is_empty() { "<unnamed>" } else { name };
                println!("  {name} = {value}");
            }
        }
    }
}

fn cmd_selectors(abi_path: &str) -> Result<()> {
    let decoder = InputDataDecoder::from_abi_file(abi_path, DecodeFormat::default())
        .with_context(|| format!("failed to load ABI '{abi_path}'"))?;

    let mut names = decoder.function_names();
    names.sort_unstable();
    for name in names {
        if let Some(selector) = decoder.selector_for(name) {
            println!("0x{}  {name}", hex::encode(selector));
        }
    }
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("CallDecode v{}", env!("CARGO_PKG_VERSION"));
    println!("  formats:  {}", VALID_FORMATS.join(", "));
    println!("  backend:  alloy-rs dynamic ABI decoding");
    println!("  outputs:  EIP-55 checksummed addresses, exact decimal integers, 0x-hex bytes");
    Ok(())
}
