use clap::Parser;
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Dialogs: rfd (native)\n",
    "Target:  ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// DJ song matcher: pick an audio track to analyse
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Folder the file dialog opens in (overrides the remembered folder for this session)
    #[arg(short = 'd', long = "start-dir", value_name = "DIR")]
    pub start_dir: Option<PathBuf>,

    /// Custom dialog filter, e.g. "Lossless (*.flac *.wav);;All Files (*)"
    #[arg(long = "filter", value_name = "FILTER")]
    pub filter: Option<String>,

    /// Enable logging to file (default: djsongmatch.log in the data dir)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Log level for the -v count: warn, info, debug, trace.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["djsongmatch"]).unwrap();
        assert!(args.start_dir.is_none());
        assert!(args.filter.is_none());
        assert!(args.log_file.is_none());
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_verbosity_count() {
        let args = Args::try_parse_from(["djsongmatch", "-vv"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        let args = Args::try_parse_from(["djsongmatch", "-vvvv"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_log_flag_optional_value() {
        let args = Args::try_parse_from(["djsongmatch", "--log"]).unwrap();
        assert_eq!(args.log_file, Some(None));
        let args = Args::try_parse_from(["djsongmatch", "-l", "/tmp/dj.log"]).unwrap();
        assert_eq!(args.log_file, Some(Some(PathBuf::from("/tmp/dj.log"))));
    }

    #[test]
    fn test_start_dir_and_filter() {
        let args = Args::try_parse_from([
            "djsongmatch",
            "-d",
            "/music",
            "--filter",
            "Lossless (*.flac)",
        ])
        .unwrap();
        assert_eq!(args.start_dir, Some(PathBuf::from("/music")));
        assert_eq!(args.filter.as_deref(), Some("Lossless (*.flac)"));
    }
}
