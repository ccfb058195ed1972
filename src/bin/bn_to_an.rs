use biodivine_bn_to_an::pint::{
    import_boolean_network, pint_protect, write_automata_network, SessionFiles,
};
use biodivine_bn_to_an::BooleanNetwork;
use clap::{Parser, ValueEnum};
use log::info;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelFormat {
    Bnet,
    Minibn,
}

/// Convert a Boolean network into a Pint automata network (`.an`).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the input model (`.bnet` or `minibn`).
    model: PathBuf,

    /// Format of the input model. Inferred from the file extension when not given
    /// (`.bnet` is BoolNet, anything else is minibn).
    #[arg(short, long, value_enum)]
    format: Option<ModelFormat>,

    /// Write the result into this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the result into a new numbered file inside this directory and print its path.
    #[arg(long, conflicts_with = "output")]
    session_dir: Option<PathBuf>,

    /// Print debug information (derived transition guards).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let model = std::fs::read_to_string(&args.model)?;
    let format = args.format.unwrap_or_else(|| infer_format(&args.model));
    let network = match format {
        ModelFormat::Bnet => BooleanNetwork::try_from_bnet(&model)?,
        ModelFormat::Minibn => BooleanNetwork::try_from_minibn(&model)?,
    };
    info!(
        "Loaded {:?} model with {} variables.",
        format,
        network.num_vars()
    );

    if let Some(directory) = args.session_dir {
        let mut files = SessionFiles::new(directory);
        let loader = |path: &Path| -> Result<PathBuf, std::io::Error> { Ok(path.to_path_buf()) };
        let path = import_boolean_network(&network, &mut files, &pint_protect, &loader)?;
        println!("{}", path.display());
    } else if let Some(output) = args.output {
        let file = std::fs::File::create(&output)?;
        write_automata_network(&network, &pint_protect, BufWriter::new(file))?;
        info!("Automata network written to {}.", output.display());
    } else {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        write_automata_network(&network, &pint_protect, &mut lock)?;
        lock.flush()?;
    }

    Ok(())
}

fn infer_format(path: &Path) -> ModelFormat {
    match path.extension().and_then(|it| it.to_str()) {
        Some("bnet") => ModelFormat::Bnet,
        _ => ModelFormat::Minibn,
    }
}
