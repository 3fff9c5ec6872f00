use std::{env, path::Path};

use held_karp_derive::{CliOptions, CliValue, KvDisplay};
use log::LevelFilter;

use crate::{
    Error, Result,
    constants::{
        DEFAULT_MAX_LOCATIONS, DEFAULT_SYMMETRY_TOLERANCE, DEFAULT_UNIT, MAX_LOCATIONS,
        MIN_LOCATIONS,
    },
};

/// Runtime options for loading, solving and reporting.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct SolverOptions {
    /// Optional input file path for the distance matrix. Empty means stdin.
    #[cli(long = "input")]
    #[kv(fmt = "debug")]
    pub input: String,
    /// Optional output file path for the report. Empty means stdout.
    #[cli(long = "output")]
    #[kv(fmt = "debug")]
    pub output: String,
    /// Comma-separated location names, one per matrix row. Empty prints indices only.
    #[cli(long = "labels")]
    #[kv(fmt = "debug")]
    pub labels: String,
    /// Distance unit appended to the reported cost.
    #[cli(long = "unit")]
    pub unit: String,
    /// Largest matrix the CLI agrees to solve; the DP grows as N²·2^N.
    #[cli(long = "max-locations")]
    pub max_locations: usize,
    /// Tolerance used to decide whether the matrix is symmetric.
    #[cli(long = "symmetry-tolerance")]
    pub symmetry_tolerance: f64,
    /// Structured logging level.
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    /// Logging output format.
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    #[cli(long = "log-output")]
    #[kv(fmt = "debug")]
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            labels: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            max_locations: DEFAULT_MAX_LOCATIONS,
            symmetry_tolerance: DEFAULT_SYMMETRY_TOLERANCE,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);

            if options.apply_cli_option(&name, value.clone())? {
                continue;
            }

            match name.as_str() {
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_LOCATIONS..=MAX_LOCATIONS).contains(&self.max_locations) {
            return Err(Error::invalid_input(format!(
                "--max-locations must be between {MIN_LOCATIONS} and {MAX_LOCATIONS}, got {}",
                self.max_locations
            )));
        }
        if !self.symmetry_tolerance.is_finite() || self.symmetry_tolerance < 0.0 {
            return Err(Error::invalid_input(format!(
                "--symmetry-tolerance must be a finite value >= 0, got {}",
                self.symmetry_tolerance
            )));
        }
        Ok(())
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  held-karp [options] [--input matrix.txt]\n",
            "  held-karp [options] < matrix.txt\n\n",
            "Input format:\n",
            "  One matrix row per line, distances separated by whitespace.\n",
            "  Lines starting with '#' are comments. Location 0 is the origin.\n\n",
            "Options:\n",
            "  --input <path>\n",
            "  --output <path>\n",
            "  --labels <name,name,...>\n",
            "  --unit <text>\n",
            "  --max-locations <usize>\n",
            "  --symmetry-tolerance <f64>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  held-karp --input distances.txt\n",
            "  held-karp --labels KUL,JAK,BKK,HKG,TPE,TOK,KOR,PEK < distances.txt\n",
            "  held-karp --unit mi --output route.txt --log-level=info < distances.txt\n",
        )
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        non_stdio_path(&self.log_output)
    }

    pub fn output_path(&self) -> Option<&Path> {
        non_stdio_path(&self.output)
    }

    pub fn input_path(&self) -> Option<&Path> {
        non_stdio_path(&self.input)
    }
}

/// Empty and `-` select the standard stream.
fn non_stdio_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use log::LevelFilter;

    use super::{LogFormat, LogLevel, SolverOptions, parse_bool};

    #[test]
    fn parse_bool_accepts_common_values() {
        assert!(parse_bool("x", "true").expect("parse"));
        assert!(parse_bool("x", "ON").expect("parse"));
        assert!(!parse_bool("x", "0").expect("parse"));
        assert!(!parse_bool("x", "NO").expect("parse"));
    }

    #[test]
    fn parse_bool_rejects_unknown_values() {
        let err = parse_bool("log-timestamp", "maybe").expect_err("invalid bool should fail");
        assert!(
            err.to_string()
                .contains("Invalid boolean for --log-timestamp: maybe")
        );
    }

    #[test]
    fn log_level_maps_to_expected_filter() {
        assert_eq!(LogLevel::Error.to_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Warn.to_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Trace.to_filter(), LevelFilter::Trace);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
    }

    #[test]
    fn log_level_parse_accepts_alias_and_any_case() {
        assert_eq!(LogLevel::parse("warning").expect("alias"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("DEBUG").expect("case"), LogLevel::Debug);
        assert_eq!(LogFormat::parse("pretty").expect("format"), LogFormat::Pretty);
        assert_eq!(LogLevel::Info.to_string(), "info");

        let err = LogFormat::parse("json").expect_err("unknown format");
        assert!(
            err.to_string()
                .contains("Invalid value for --log-format: json (expected compact|pretty)")
        );
    }

    #[test]
    fn parse_from_iter_applies_known_cli_options() {
        let options = SolverOptions::parse_from_iter([
            "--input=matrix.txt",
            "--output",
            "route.txt",
            "--labels=KUL,JAK",
            "--unit=mi",
            "--max-locations=12",
            "--symmetry-tolerance=0.5",
            "--log-level=debug",
            "--log-format=pretty",
            "--log-timestamp=false",
            "--log-output=run.log",
        ])
        .expect("parse options");

        assert_eq!(options.input, "matrix.txt");
        assert_eq!(options.output, "route.txt");
        assert_eq!(options.labels, "KUL,JAK");
        assert_eq!(options.unit, "mi");
        assert_eq!(options.max_locations, 12);
        assert_eq!(options.symmetry_tolerance, 0.5);
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.log_format, LogFormat::Pretty);
        assert!(!options.log_timestamp);
        assert_eq!(options.log_output, "run.log");
    }

    #[test]
    fn usage_lists_every_generated_option() {
        let usage = SolverOptions::usage();
        for name in SolverOptions::cli_option_names() {
            assert!(usage.contains(&format!("--{name} ")), "missing --{name}");
        }
    }

    #[test]
    fn parse_from_iter_accepts_no_log_timestamp_flag() {
        let options =
            SolverOptions::parse_from_iter(["--no-log-timestamp"]).expect("parse options");
        assert!(!options.log_timestamp);
    }

    #[test]
    fn parse_from_iter_rejects_no_log_timestamp_with_value() {
        let err = SolverOptions::parse_from_iter(["--no-log-timestamp=true"])
            .expect_err("expected flag value rejection");
        assert!(err.to_string().contains("does not take a value"));
    }

    #[test]
    fn parse_from_iter_rejects_unknown_option() {
        let err = SolverOptions::parse_from_iter(["--cities=8"])
            .expect_err("expected unknown option error");
        assert!(err.to_string().contains("Unknown option: --cities"));
    }

    #[test]
    fn parse_from_iter_rejects_unexpected_positional_argument() {
        let err =
            SolverOptions::parse_from_iter(["input.txt"]).expect_err("expected positional error");
        assert!(err.to_string().contains("Unexpected argument: input.txt"));
    }

    #[test]
    fn parse_from_iter_requires_value_for_input() {
        let err =
            SolverOptions::parse_from_iter(["--input"]).expect_err("missing value should fail");
        assert!(err.to_string().contains("Missing value for --input"));
    }

    #[test]
    fn parse_from_iter_rejects_non_numeric_max_locations() {
        let err = SolverOptions::parse_from_iter(["--max-locations=many"])
            .expect_err("invalid usize should fail");
        assert!(err.to_string().contains("Invalid value for --max-locations: many"));
    }

    #[test]
    fn parse_from_iter_rejects_out_of_range_max_locations() {
        for raw in ["--max-locations=1", "--max-locations=33"] {
            let err = SolverOptions::parse_from_iter([raw]).expect_err("out of range");
            assert!(err.to_string().contains("--max-locations must be between 2 and 32"));
        }
    }

    #[test]
    fn parse_from_iter_rejects_negative_symmetry_tolerance() {
        let err = SolverOptions::parse_from_iter(["--symmetry-tolerance=-1"])
            .expect_err("negative tolerance");
        assert!(err.to_string().contains("--symmetry-tolerance must be"));
    }

    #[test]
    fn parse_from_iter_help_returns_usage_error() {
        let err =
            SolverOptions::parse_from_iter(["--help"]).expect_err("help should short-circuit");
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn defaults_match_documented_values() {
        let options = SolverOptions::default();
        assert_eq!(options.unit, "km");
        assert_eq!(options.max_locations, 20);
        assert!(options.log_timestamp);
        assert!(options.labels.is_empty());
    }

    #[test]
    fn io_paths_treat_empty_and_dash_as_standard_streams() {
        let options = SolverOptions::default();
        assert!(options.input_path().is_none());
        assert!(options.output_path().is_none());
        assert!(options.log_output_path().is_none());

        let options = SolverOptions {
            input: "-".to_string(),
            output: " - ".to_string(),
            log_output: "-".to_string(),
            ..SolverOptions::default()
        };
        assert!(options.input_path().is_none());
        assert!(options.output_path().is_none());
        assert!(options.log_output_path().is_none());
    }

    #[test]
    fn io_paths_return_path_for_non_empty_values() {
        let options = SolverOptions {
            input: "in/matrix.txt".to_string(),
            output: "out/route.txt".to_string(),
            log_output: "out/run.log".to_string(),
            ..SolverOptions::default()
        };
        assert_eq!(options.input_path(), Some(Path::new("in/matrix.txt")));
        assert_eq!(options.output_path(), Some(Path::new("out/route.txt")));
        assert_eq!(options.log_output_path(), Some(Path::new("out/run.log")));
    }

    #[test]
    fn display_lists_resolved_options() {
        let text = SolverOptions::default().to_string();
        assert!(text.contains("max_locations"));
        assert!(text.contains("= 20"));
        assert!(text.contains("input              = \"\""));
    }
}
