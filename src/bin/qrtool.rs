use clap::{ArgGroup, Parser, Subcommand};
use qr_payload::tools::{format_hex, parse_bit_string, parse_hex, read_hex_file};
use qr_payload::{BitReader, CodewordReader, FieldWidths, Mode, SegmentDecoder, SymbolTier};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR payload decoding tools")]
struct Cli {
    /// Log segment-level diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the byte payload of one symbol
    #[command(group(ArgGroup::new("input").required(true).args(["hex", "bits", "file"])))]
    Decode {
        /// Symbol version (1-40)
        #[arg(long = "symbol-version", short = 's')]
        version: u8,
        /// Data codewords as hex
        #[arg(long)]
        hex: Option<String>,
        /// Payload as a string of 0/1 characters
        #[arg(long)]
        bits: Option<String>,
        /// File of hex codewords
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print field widths for every mode at a symbol version
    Widths {
        /// Symbol version (1-40)
        #[arg(long = "symbol-version", short = 's')]
        version: u8,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(if cli.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        });
    }

    match cli.command {
        Command::Decode {
            version,
            hex,
            bits,
            file,
        } => decode_cmd(version, hex, bits, file),
        Command::Widths { version } => widths_cmd(version),
    }
}

fn decode_cmd(
    version: u8,
    hex: Option<String>,
    bits: Option<String>,
    file: Option<PathBuf>,
) -> ExitCode {
    if SymbolTier::from_version(version).is_none() {
        log::warn!("version {} is outside 1-40, byte segments will not be expanded", version);
    }

    let decoded = match (bits, hex, file) {
        (Some(bits), _, _) => parse_bit_string(&bits).map(|bits| {
            let mut cursor = BitReader::new(&bits);
            let (bytes, stop) = SegmentDecoder::new(version).decode_with_termination(&mut cursor);
            log::info!("stopped: {:?} at bit {}", stop, cursor.position());
            bytes
        }),
        (None, Some(hex), _) => parse_hex(&hex).map(|codewords| decode_codewords(version, &codewords)),
        (None, None, Some(path)) => {
            read_hex_file(&path).map(|codewords| decode_codewords(version, &codewords))
        }
        (None, None, None) => {
            eprintln!("Error: one of --hex, --bits or --file is required");
            return ExitCode::FAILURE;
        }
    };

    match decoded {
        Ok(bytes) => {
            println!("Decoded {} bytes", bytes.len());
            println!("  hex:  {}", format_hex(&bytes));
            println!("  text: {}", String::from_utf8_lossy(&bytes));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn decode_codewords(version: u8, codewords: &[u8]) -> Vec<u8> {
    let mut cursor = CodewordReader::new(codewords);
    let (bytes, stop) = SegmentDecoder::new(version).decode_with_termination(&mut cursor);
    log::info!("stopped: {:?} at bit {}", stop, cursor.position());
    bytes
}

fn widths_cmd(version: u8) -> ExitCode {
    let Some(tier) = SymbolTier::from_version(version) else {
        eprintln!("Error: version {} is outside 1-40", version);
        return ExitCode::FAILURE;
    };

    println!("Version {} ({:?})", version, tier);
    for mode in Mode::ALL {
        let widths = FieldWidths::lookup(mode, version);
        let show = |w: Option<usize>| w.map_or_else(|| "-".to_string(), |w| w.to_string());
        println!(
            "  {} {:<16} length={:>2} per_char={:>2}",
            mode,
            format!("{:?}", mode),
            show(widths.length_field_bits),
            show(widths.per_character_bits)
        );
    }
    ExitCode::SUCCESS
}

/// Stderr logger honouring the global max level.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            eprintln!("{} ({}): {}", record.level(), target, record.args());
        }
    }

    fn flush(&self) {}
}
