//! flow-layout CLI entry point.
//!
//! Reads a flow JSON description, runs the layout pipeline, and prints the
//! computed layout as JSON for downstream renderers.

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;

use flow_layout::{LayoutConfig, layout_flow_json};

/// Pipeline flow to layered 2D layout (JSON in, JSON out).
#[derive(Parser, Debug)]
#[command(
    name = "flow-layout",
    version = env!("FLOW_LAYOUT_VERSION"),
    about = "Pipeline flow to layered 2D layout (JSON in, JSON out)"
)]
struct Cli {
    /// Input flow JSON file (reads from stdin if not provided)
    input: Option<String>,

    /// Horizontal gap between layer bands
    #[arg(long = "layer-spacing")]
    layer_spacing: Option<f64>,

    /// Vertical gap between nodes in the same layer
    #[arg(long = "node-spacing")]
    node_spacing: Option<f64>,

    /// Outer margin around the drawing
    #[arg(short = 'p', long = "padding")]
    padding: Option<f64>,

    /// Pretty-print the output JSON
    #[arg(long = "pretty")]
    pretty: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let mut config = LayoutConfig::default();
    if let Some(v) = cli.layer_spacing {
        config.layer_spacing = v;
    }
    if let Some(v) = cli.node_spacing {
        config.node_spacing = v;
    }
    if let Some(v) = cli.padding {
        config.padding = v;
    }

    let result = match layout_flow_json(&text, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let encoded = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    let rendered = match encoded {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot encode layout: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        match fs::write(path, rendered) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("error: cannot write '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", rendered);
    }
}
