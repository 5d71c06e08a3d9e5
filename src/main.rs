/*
Copyright 2026 The rv32i-asm Authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rv32i_asm::errors::AssemblyError;
use rv32i_asm::file_reader::AsmFileReader;
use rv32i_asm::{assemble, OutputFormat};

/// `assembler <input> <output> <-h|-b>`. `-h`/`-b` select hex/binary output
/// and collide with clap's own `-h`/`--help` short flag, so the built-in
/// help flag is disabled here and `format` is validated by hand after
/// parsing instead of through clap's value parser.
#[derive(Parser)]
#[command(version, disable_help_flag = true)]
struct Cli {
    input: PathBuf,
    output: PathBuf,
    #[arg(allow_hyphen_values = true)]
    format: String,
}

fn parse_format(raw: &str) -> Result<OutputFormat, AssemblyError> {
    match raw {
        "-h" => Ok(OutputFormat::Hex),
        "-b" => Ok(OutputFormat::Binary),
        other => Err(AssemblyError::Usage(format!("unknown output flag `{other}`, expected -h or -b"))),
    }
}

/// Parses argv, mapping clap's own exit(2)-on-error behaviour onto a
/// regular `AssemblyError::Usage` so a wrong argument count surfaces
/// through `run()`'s `Result` and exits 1 like every other usage error,
/// per spec.md §6. `--version` (left enabled by `#[command(version)]`)
/// still prints and exits 0, since it is not a usage failure.
fn parse_cli() -> anyhow::Result<Cli> {
    use clap::error::ErrorKind;

    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            print!("{err}");
            std::process::exit(0);
        }
        Err(err) => Err(AssemblyError::Usage(err.to_string()).into()),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = parse_cli()?;
    let format = parse_format(&cli.format)?;

    let reader = AsmFileReader;
    let output = assemble(&cli.input, format, &reader)?;
    fs::write(&cli.output, output)?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
