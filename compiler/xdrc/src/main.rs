//! xdrc command line.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use xdrc::{generate, init_tracing, GenConfig, GenError};

/// Generate constant bindings from an XDR protocol definition.
#[derive(Parser, Debug)]
#[command(name = "xdrc", version, long_about = None)]
struct Args {
    /// Protocol definition to read, or `-` for stdin
    input: PathBuf,

    /// Write the output here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Directory containing a `constants.tmpl` override
    #[arg(long, value_name = "DIR")]
    template_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), GenError> {
    let config = GenConfig {
        template_dir: args.template_dir.clone(),
    };

    // Render into memory so a failed run never creates the output file.
    let mut rendered = Vec::new();
    if args.input == Path::new("-") {
        generate(io::stdin().lock(), &mut rendered, &config)?;
    } else {
        let input = File::open(&args.input).map_err(GenError::Read)?;
        generate(input, &mut rendered, &config)?;
    }

    let written = match &args.output {
        Some(path) => write_file(path, &rendered),
        None => write_stdout(&rendered),
    };
    written.map_err(|e| GenError::Emit(e.into()))
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}

fn write_stdout(bytes: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()
}

/// The error followed by its chain of causes. A cause already spelled out
/// by the message before it is not repeated.
fn describe(err: &GenError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
