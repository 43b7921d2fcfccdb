//! elabs CLI - build, export and view circuits from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use elabs::{
    battery, bulb, download_file_by_extension, view_on_website, Circuit, ComponentKind,
    ViewerOptions, FRONTEND_URL_ENV,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "elabs")]
#[command(about = "Build electronic circuits and open them in the elabs visualizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the example circuit (9v battery lighting a bulb) and print it
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Also open the visualizer in the default browser
        #[arg(long)]
        show: bool,

        /// Visualizer frontend URL, the built-in default when unset
        #[arg(long, env = FRONTEND_URL_ENV)]
        frontend_url: Option<String>,
    },

    /// List available component kinds
    Kinds {
        /// Show the properties of each kind
        #[arg(short, long)]
        verbose: bool,
    },

    /// Copy the first file in a directory tree whose name ends with EXT
    Find {
        /// Directory to search
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// File name suffix, e.g. ".ino"
        #[arg(value_name = "EXT")]
        extension: String,

        /// Where to write the copy
        #[arg(value_name = "OUT")]
        output: PathBuf,
    },

    /// Open a URL in the default browser
    View {
        #[arg(value_name = "URL")]
        url: String,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// The exported circuit dictionary as JSON
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Demo {
            format,
            show,
            frontend_url,
        } => {
            let options = frontend_url
                .map(|frontend_url| ViewerOptions { frontend_url })
                .unwrap_or_default();
            handle_demo(format, show, &options)
        }
        Commands::Kinds { verbose } => {
            handle_kinds(verbose);
            Ok(0)
        }
        Commands::Find {
            dir,
            extension,
            output,
        } => Ok(handle_find(&dir, &extension, &output)),
        Commands::View { url } => view_on_website(&url).map(|_| 0).map_err(Into::into),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn demo_circuit() -> Circuit {
    let battery = battery("9v");
    let bulb = bulb("1.5v", "3v");

    let mut circuit = Circuit::new();
    circuit.add([&battery, &bulb]);
    circuit.connect(&battery, "pos", &bulb, "anode");
    circuit
}

fn handle_demo(format: OutputFormat, show: bool, options: &ViewerOptions) -> anyhow::Result<i32> {
    let circuit = demo_circuit();

    match format {
        OutputFormat::Human => output_human(&circuit),
        OutputFormat::Json => println!("{}", circuit.to_json()?),
    }

    if show {
        circuit.show(Some(&options.frontend_url))?;
    }
    Ok(0)
}

fn output_human(circuit: &Circuit) {
    println!("\nComponents:");
    println!("{}", "─".repeat(60));
    for component in circuit.components() {
        println!("  {} ({})", component.id(), component.kind());
        for (key, value) in component.properties.iter() {
            println!("    {}: {}", key, value);
        }
    }

    println!("\nWires:");
    println!("{}", "─".repeat(60));
    for wire in circuit.wires() {
        println!(
            "  {}.{} -> {}.{} [{}]",
            wire.from_component_id(),
            wire.from_terminal(),
            wire.to_component_id(),
            wire.to_terminal(),
            wire.color()
        );
    }

    let stats = circuit.stats();
    println!("\n  Summary:");
    println!("    Components: {}", stats.component_count);
    println!("    Wires:      {}", stats.wire_count);
}

fn handle_find(dir: &Path, extension: &str, output: &Path) -> i32 {
    if download_file_by_extension(dir, extension, output) {
        println!("Copied first *{} file to {}", extension, output.display());
        0
    } else {
        eprintln!(
            "Error: no *{} file could be copied from {}",
            extension,
            dir.display()
        );
        1
    }
}

fn property_default(kind: ComponentKind, key: &str) -> Option<&'static str> {
    match (kind, key) {
        (ComponentKind::Led, "color") => Some("\"red\""),
        (ComponentKind::Switch, "closed") => Some("false"),
        (ComponentKind::Buzzer, "frequency") => Some("\"1000\""),
        (ComponentKind::ArduinoUno, "code") => Some("\"\""),
        (ComponentKind::ArduinoUno, "isRunning") => Some("false"),
        (ComponentKind::TransistorNpn, "type") => Some("\"NPN\""),
        (ComponentKind::TransistorNpn, "gain") => Some("\"100\""),
        _ => None,
    }
}

fn handle_kinds(verbose: bool) {
    println!("Available component kinds:\n");

    for kind in ComponentKind::ALL {
        println!("  {}", kind);
        if verbose {
            let names = kind.property_names();
            if names.is_empty() {
                println!("    (no properties)");
            }
            for name in names {
                match property_default(kind, name) {
                    Some(default) => println!("    {} (default {})", name, default),
                    None => println!("    {}", name),
                }
            }
            println!();
        }
    }
}
