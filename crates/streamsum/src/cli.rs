//! Shared entry points for the worker binaries.
//!
//! Each worker reads raw bytes from stdin to end-of-stream, writes the
//! lowercase hex digest to stdout, and, when a nonzero total-size hint is
//! passed as the first argument, reports `PROGRESS:<percent>` lines on
//! stderr while the stream advances.

use std::{env, io, process::ExitCode};

use hashes::hex;
use traits::{Checksum, Digest};

use crate::stream::{self, Progress};

/// Parsed command line for a worker binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct Args {
  /// Expected stream length in bytes. Zero disables progress reporting.
  pub total: u64,
}

/// Parse the process arguments.
///
/// # Errors
///
/// Returns `Err` with an empty message after printing help, or with a
/// diagnostic for a malformed command line.
pub fn parse_args(tool: &str) -> Result<Args, String> {
  parse_from(tool, env::args().skip(1))
}

/// Parse an explicit argument list.
///
/// The first positional argument is the decimal total-size hint. A hint
/// that does not parse degrades to zero, which disables progress reporting;
/// callers that spawn workers over arbitrary inputs rely on the hint never
/// being fatal. Extra positional arguments are ignored.
pub fn parse_from<I>(tool: &str, argv: I) -> Result<Args, String>
where
  I: IntoIterator<Item = String>,
{
  let mut args = Args::default();
  let mut total_seen = false;
  for arg in argv {
    match arg.as_str() {
      "--help" | "-h" => {
        print_help(tool);
        return Err(String::new());
      }
      value => {
        if !total_seen {
          total_seen = true;
          args.total = value.parse().unwrap_or(0);
        }
      }
    }
  }
  Ok(args)
}

fn print_help(tool: &str) {
  eprintln!(
    "\
{tool}: hash standard input

USAGE:
  {tool} [TOTAL_BYTES]

Reads raw bytes from stdin until end-of-stream and prints the lowercase hex
digest to stdout. TOTAL_BYTES is an optional decimal size hint; when present
and nonzero, PROGRESS:<percent> lines are written to stderr as the stream
advances."
  );
}

fn run(tool: &str, body: impl FnOnce(Args) -> io::Result<()>) -> ExitCode {
  let args = match parse_args(tool) {
    Ok(args) => args,
    Err(msg) => {
      if msg.is_empty() {
        return ExitCode::SUCCESS;
      }
      eprintln!("{msg}");
      return ExitCode::FAILURE;
    }
  };

  match body(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{tool}: {err}");
      ExitCode::FAILURE
    }
  }
}

fn drive(args: Args, on_chunk: impl FnMut(&[u8])) -> io::Result<u64> {
  let stdin = io::stdin();
  let mut progress = Progress::new(io::stderr(), args.total);
  stream::consume(&mut stdin.lock(), &mut progress, on_chunk)
}

/// Hash stdin with `D` and print the lowercase hex digest.
pub fn digest_main<D>(tool: &str) -> ExitCode
where
  D: Digest,
  D::Output: AsRef<[u8]>,
{
  run(tool, |args| {
    let mut hasher = D::new();
    drive(args, |chunk| hasher.update(chunk))?;
    println!("{}", hex(hasher.finalize().as_ref()));
    Ok(())
  })
}

/// Checksum stdin with `C` and print the value as eight hex digits.
pub fn checksum_main<C>(tool: &str) -> ExitCode
where
  C: Checksum<Output = u32>,
{
  run(tool, |args| {
    let mut hasher = C::new();
    drive(args, |chunk| hasher.update(chunk))?;
    println!("{:08x}", hasher.finalize());
    Ok(())
  })
}
