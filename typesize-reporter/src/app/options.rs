/*!
 Command line options and their validation.
*/

use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};

use typesize::util::platform::Architecture;

use crate::app::error::RuntimeError;

// Options
pub const OPTION_ENCODINGS: &str = "encodings";
pub const OPTION_ARCHITECTURE: &str = "arch";
pub const OPTION_FIELDS: &str = "fields";
pub const OPTION_EXPLICIT_SIZE: &str = "explicit-size";
pub const OPTION_STRICT: &str = "strict";
pub const OPTION_FORMAT: &str = "format";

// Other CLI Text
pub const SUPPORTED_ARCHITECTURES: &str = "ilp32, lp64, llp64";
pub const SUPPORTED_FORMATS: &str = "txt, ndjson";
pub const ABOUT: &str = concat!(
    "The `typesize-reporter` binary reports how many bytes values described by\n",
    "Objective-C style type encodings occupy, such as `i`, `^d`, or `[4[3i]]`.\n",
    "Encodings that cannot be sized, such as structs or objects, are reported as indeterminate."
);

/// Represents the output formats the app can report in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line of text per encoding
    TXT,
    /// One JSON object per encoding
    NDJSON,
}

impl ReportFormat {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(format: &str) -> Option<Self> {
        match format.to_lowercase().as_str() {
            "txt" => Some(Self::TXT),
            "ndjson" => Some(Self::NDJSON),
            _ => None,
        }
    }
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::TXT
    }
}

/// Validated command line options
#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// The encodings to report on
    pub encodings: Vec<String>,
    /// Supplies the width of `long` and pointers
    pub architecture: Architecture,
    /// If true, each encoding is a record and every field is reported
    pub fields: bool,
    /// Size substituted for indeterminate encodings
    pub explicit_size: Option<usize>,
    /// If true, an indeterminate size without a substitute is an error
    pub strict: bool,
    /// The format to report in
    pub format: ReportFormat,
}

impl Options {
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let encodings: Vec<String> = args
            .get_many::<String>(OPTION_ENCODINGS)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let user_architecture = args.get_one::<String>(OPTION_ARCHITECTURE);
        let user_format = args.get_one::<String>(OPTION_FORMAT);
        let fields = args.get_flag(OPTION_FIELDS);
        let explicit_size = args.get_one::<usize>(OPTION_EXPLICIT_SIZE).copied();
        let strict = args.get_flag(OPTION_STRICT);

        if encodings.is_empty() {
            return Err(RuntimeError::InvalidOptions(
                "No type encodings provided!".to_string(),
            ));
        }

        if let Some(encoding) = encodings.iter().find(|encoding| !encoding.is_ascii()) {
            return Err(RuntimeError::InvalidOptions(format!(
                "{encoding} is not a valid type encoding! Type encodings are ASCII"
            )));
        }

        let architecture = match user_architecture {
            Some(architecture) => Architecture::from_cli(architecture).ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "{architecture} is not a valid architecture! Must be one of <{SUPPORTED_ARCHITECTURES}>"
                ))
            })?,
            None => Architecture::default(),
        };

        let format = match user_format {
            Some(format) => ReportFormat::from_cli(format).ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "{format} is not a valid report format! Must be one of <{SUPPORTED_FORMATS}>"
                ))
            })?,
            None => ReportFormat::default(),
        };

        Ok(Options {
            encodings,
            architecture,
            fields,
            explicit_size,
            strict,
            format,
        })
    }
}

/// Build the command line interface
pub fn get_command() -> Command {
    Command::new("typesize-reporter")
        .version(crate_version!())
        .about(ABOUT)
        .arg_required_else_help(true)
        .arg(
            Arg::new(OPTION_ARCHITECTURE)
                .short('a')
                .long(OPTION_ARCHITECTURE)
                .help("Specify the data model that produced the encodings\nIf omitted, the default is `lp64`\n")
                .display_order(0)
                .value_name(SUPPORTED_ARCHITECTURES),
        )
        .arg(
            Arg::new(OPTION_FIELDS)
                .short('f')
                .long(OPTION_FIELDS)
                .help("Treat each encoding as a record and report the size of every field\n")
                .action(ArgAction::SetTrue)
                .display_order(1),
        )
        .arg(
            Arg::new(OPTION_EXPLICIT_SIZE)
                .short('e')
                .long(OPTION_EXPLICIT_SIZE)
                .help("Substitute this many bytes for encodings whose size is indeterminate\n")
                .value_parser(value_parser!(usize))
                .display_order(2)
                .value_name("BYTES"),
        )
        .arg(
            Arg::new(OPTION_STRICT)
                .short('s')
                .long(OPTION_STRICT)
                .help("Fail if any size is indeterminate and no substitute is provided\n")
                .action(ArgAction::SetTrue)
                .display_order(3),
        )
        .arg(
            Arg::new(OPTION_FORMAT)
                .short('o')
                .long(OPTION_FORMAT)
                .help("Specify the report format\nIf omitted, the default is `txt`\n")
                .display_order(4)
                .value_name(SUPPORTED_FORMATS),
        )
        .arg(
            Arg::new(OPTION_ENCODINGS)
                .help("The type encodings to report on")
                .num_args(1..)
                .value_name("ENCODING"),
        )
}

/// Parse arguments from the command line
pub fn from_command_line() -> ArgMatches {
    get_command().get_matches()
}

#[cfg(test)]
mod arg_tests {
    use typesize::util::platform::Architecture;

    use crate::app::{
        error::RuntimeError,
        options::{get_command, Options, ReportFormat},
    };

    fn parse(args: &[&str]) -> Result<Options, RuntimeError> {
        let command = get_command();
        let matches = command.get_matches_from(args);
        Options::from_args(&matches)
    }

    #[test]
    fn can_build_option_defaults() {
        let options = parse(&["typesize-reporter", "i"]).unwrap();

        let expected = Options {
            encodings: vec!["i".to_string()],
            architecture: Architecture::LP64,
            fields: false,
            explicit_size: None,
            strict: false,
            format: ReportFormat::TXT,
        };

        assert_eq!(options, expected);
    }

    #[test]
    fn can_build_option_all() {
        let options = parse(&[
            "typesize-reporter",
            "-a",
            "ILP32",
            "-f",
            "-e",
            "16",
            "-s",
            "-o",
            "ndjson",
            "i[4c]",
            "^d",
        ])
        .unwrap();

        let expected = Options {
            encodings: vec!["i[4c]".to_string(), "^d".to_string()],
            architecture: Architecture::ILP32,
            fields: true,
            explicit_size: Some(16),
            strict: true,
            format: ReportFormat::NDJSON,
        };

        assert_eq!(options, expected);
    }

    #[test]
    fn cant_build_option_bad_architecture() {
        let options = parse(&["typesize-reporter", "--arch", "x86", "i"]);

        assert!(matches!(options, Err(RuntimeError::InvalidOptions(_))));
    }

    #[test]
    fn cant_build_option_bad_format() {
        let options = parse(&["typesize-reporter", "--format", "html", "i"]);

        assert!(matches!(options, Err(RuntimeError::InvalidOptions(_))));
    }

    #[test]
    fn cant_build_option_no_encodings() {
        let options = parse(&["typesize-reporter", "--strict"]);

        assert!(matches!(options, Err(RuntimeError::InvalidOptions(_))));
    }

    #[test]
    fn cant_build_option_non_ascii_encoding() {
        let options = parse(&["typesize-reporter", "--fields", "i\u{e9}d"]);

        assert!(matches!(options, Err(RuntimeError::InvalidOptions(_))));
    }

    #[test]
    fn can_parse_format_any_case() {
        assert_eq!(ReportFormat::from_cli("TXT"), Some(ReportFormat::TXT));
        assert_eq!(ReportFormat::from_cli("NDJson"), Some(ReportFormat::NDJSON));
        assert_eq!(ReportFormat::from_cli("csv"), None);
    }
}
