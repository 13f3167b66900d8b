mod path;
mod transcode;

use clap::Parser;
use owo_colors::{OwoColorize, Stream::Stderr, Style};
use std::{env, ffi::OsString, fs::File, io::BufReader, path::PathBuf, process};
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The input JSON file
    #[clap(short, long)]
    input: Option<OsString>,
    /// The output YAML file
    #[clap(short, long)]
    output: Option<OsString>,
}

fn main() {
    let args = Args::parse();
    // See: https://bazel.build/docs/user-manual#running-executables
    let cwd = env::var_os("BUILD_WORKING_DIRECTORY").unwrap_or_default();
    if let Err(e) = run(args, PathBuf::from(cwd)) {
        eprintln!(
            "{} {}",
            "[ERROR]:".if_supports_color(Stderr, |t| t.style(Style::new().red().bold())),
            e
        );
        process::exit(1);
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Argument(String),
    #[error("{0}")]
    Path(String),
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Encode(String),
}

/// An empty flag value counts as missing.
fn required(value: Option<OsString>, msg: &str) -> Result<PathBuf, Error> {
    value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| Error::Argument(msg.to_string()))
}

fn run(args: Args, cwd: PathBuf) -> Result<(), Error> {
    let input = required(args.input, "An input file must be specified")?;
    let output = required(args.output, "An output file must be specified")?;

    let input = path::canonicalize(&cwd, &input);
    let output = path::canonicalize(&cwd, &output);

    let in_file = File::open(&input).map_err(|e| {
        Error::Path(format!(
            "Failed to open input file '{}': {}",
            input.display(),
            e
        ))
    })?;
    let out_file = File::create(&output).map_err(|e| {
        Error::Path(format!(
            "Failed to open output file '{}': {}",
            output.display(),
            e
        ))
    })?;

    transcode::convert(BufReader::new(in_file), out_file).map_err(|e| match e {
        Error::Decode(msg) => Error::Decode(conversion_failed(msg)),
        Error::Encode(msg) => Error::Encode(conversion_failed(msg)),
        other => other,
    })?;
    eprintln!(
        "{} {}  {}  {}",
        "Converted".if_supports_color(Stderr, |t| t.style(Style::new().green().bold())),
        input.display().if_supports_color(Stderr, |t| t.dimmed()),
        "->".if_supports_color(Stderr, |t| t.style(Style::new().white().bold())),
        output.display().if_supports_color(Stderr, |t| t.dimmed())
    );
    Ok(())
}

fn conversion_failed(msg: String) -> String {
    format!("Failed to perform JSON to YAML conversion: {}", msg)
}
