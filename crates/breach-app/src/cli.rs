use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Breach: three browser views in one window.
#[derive(Parser, Debug, Default)]
#[command(name = "breach", version, about, ignore_errors = true)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Flags this binary owns, and whether each takes a value.
const OWN_FLAGS: [(&str, bool); 6] = [
    ("--config", true),
    ("--log-level", true),
    ("--help", false),
    ("-h", false),
    ("--version", false),
    ("-V", false),
];

/// Parse the raw process arguments. Arguments meant for the browser engine
/// are dropped wherever they appear, so they never hide our own flags.
pub fn parse(raw: &[String]) -> Args {
    match Args::try_parse_from(own_args(raw)) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Args::default(),
    }
}

/// The program name plus our own flags and their values, in order.
fn own_args(raw: &[String]) -> Vec<&str> {
    let mut iter = raw.iter().map(String::as_str);
    let mut out: Vec<&str> = iter.next().into_iter().collect();
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }
        let name = arg.split_once('=').map_or(arg, |(name, _)| name);
        let Some(&(_, takes_value)) = OWN_FLAGS.iter().find(|(flag, _)| *flag == name) else {
            continue;
        };
        out.push(arg);
        if takes_value && !arg.contains('=') {
            out.extend(iter.next());
        }
    }
    out
}
