//! CRC-32 worker: checksums stdin, prints the value.

use std::process::ExitCode;

use streamsum::{Crc32, cli};

fn main() -> ExitCode {
  cli::checksum_main::<Crc32>("crc32")
}
