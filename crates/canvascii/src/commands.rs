//! Command-line definition.
//!
//! Drawing options may repeat and their relative order matters, so the
//! command is built with clap's builder API and the order is recovered
//! from argument indices.

use std::ffi::OsString;

use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap::ValueEnum;
use clap::error::ContextKind;
use clap::error::ContextValue;
use clap::error::ErrorKind;

use canvascii_core::BoundsPolicy;
use canvascii_core::CanvasError;
use canvascii_core::ops;

pub const USAGE: &str = "./canvascii [-n HEIGHT,WIDTH] [-s] [-k] [-p CHAR]
          [-h ROW] [-v COL] [-r ROW,COL,HEIGHT,WIDTH]
          [-l ROW1,COL1,ROW2,COL2] [-c ROW,COL,RADIUS]";

const ABOUT: &str = r#"Draws on an ASCII canvas. The canvas is provided on stdin and
the result is printed on stdout. The dimensions of the canvas
are limited to at most 40 rows and at most 80 columns.

If no argument is provided, the program prints this help and exits."#;

const AFTER_HELP: &str = r#"PIXELS:
    A canvas row contains only '.' (empty) and the digits 0 to 7. With -k,
    digits are shown as ANSI background colors:
        0: black  1: red      2: green  3: yellow
        4: blue   5: magenta  6: cyan   7: white

COORDINATES:
    Every option lists the row before the column. Shapes may reach past
    the canvas edges; the outside part is clipped unless --strict is set.

EXAMPLES:
    canvascii -n 5,10 -h 2
    canvascii -n 19,19 -p 1 -c 9,9,8 -k
    canvascii -s < canvas.txt
    canvascii -p 4 -l 0,0,4,9 < canvas.txt"#;

/// Drawing flags in the order they are looked up.
const DRAWING_ARGS: [(&str, &str); 6] = [
    ("pen", ops::PEN),
    ("horizontal", ops::HORIZONTAL),
    ("vertical", ops::VERTICAL),
    ("rectangle", ops::RECTANGLE),
    ("line", ops::SEGMENT),
    ("circle", ops::CIRCLE),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the canvas comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasSource {
    /// `-n HEIGHT,WIDTH`, kept raw so the engine validates it.
    Blank(String),
    Stdin,
}

/// A drawing option and its raw value, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub flag: &'static str,
    pub value: String,
}

/// Everything one run of the program needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: CanvasSource,
    pub show_only: bool,
    pub color: bool,
    pub steps: Vec<Step>,
    pub policy: BoundsPolicy,
    pub format: OutputFormat,
    pub no_color: bool,
}

/// Outcome of reading the command line.
#[derive(Debug)]
pub enum Parsed {
    Run(Invocation),
    /// Help or version text to print on stdout before exiting successfully.
    Info(String),
}

fn drawing_arg(id: &'static str, short: char, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .value_name(value_name)
        .help(help)
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help_heading("Drawing options")
}

pub fn command() -> Command {
    Command::new("canvascii")
        .version(env!("CARGO_PKG_VERSION"))
        .about(ABOUT)
        .override_usage(USAGE)
        .after_help(AFTER_HELP)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("new")
                .short('n')
                .long("new")
                .value_name("HEIGHT,WIDTH")
                .help("Creates a new empty canvas of HEIGHT rows and WIDTH columns; ignores stdin")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help_heading("Canvas options"),
        )
        .arg(
            Arg::new("show")
                .short('s')
                .long("show")
                .help("Shows the canvas and exits")
                .action(ArgAction::SetTrue)
                .overrides_with("show")
                .help_heading("Canvas options"),
        )
        .arg(
            Arg::new("color")
                .short('k')
                .long("color")
                .help("Enables colored output")
                .action(ArgAction::SetTrue)
                .overrides_with("color")
                .help_heading("Canvas options"),
        )
        .arg(drawing_arg(
            "pen",
            'p',
            "CHAR",
            "Sets the pen to CHAR (0 to 7, default 7)",
        ))
        .arg(drawing_arg(
            "horizontal",
            'h',
            "ROW",
            "Draws a horizontal line on row ROW",
        ))
        .arg(drawing_arg(
            "vertical",
            'v',
            "COL",
            "Draws a vertical line on column COL",
        ))
        .arg(drawing_arg(
            "rectangle",
            'r',
            "ROW,COL,HEIGHT,WIDTH",
            "Draws a rectangle of dimension HEIGHTxWIDTH with top left corner at (ROW,COL)",
        ))
        .arg(drawing_arg(
            "line",
            'l',
            "ROW1,COL1,ROW2,COL2",
            "Draws a discrete segment from (ROW1,COL1) to (ROW2,COL2) with Bresenham's algorithm",
        ))
        .arg(drawing_arg(
            "circle",
            'c',
            "ROW,COL,RADIUS",
            "Draws a circle centered at (ROW,COL) of radius RADIUS with the midpoint algorithm",
        ))
        .arg(
            Arg::new("strict")
                .long("strict")
                .env("CANVASCII_STRICT")
                .help("Rejects shapes that do not fit in the canvas instead of clipping them")
                .action(ArgAction::SetTrue)
                .overrides_with("strict"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(clap::value_parser!(OutputFormat))
                .default_value("text")
                .overrides_with("format"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .env("NO_COLOR")
                .help("Disables colored diagnostics")
                .action(ArgAction::SetTrue)
                .overrides_with("no-color"),
        )
        .arg(
            Arg::new("help")
                .long("help")
                .help("Prints help")
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Prints version")
                .action(ArgAction::Version),
        )
}

/// Parses the full argument vector, program name included.
pub fn parse<I, T>(args: I) -> Result<Parsed, CanvasError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut cmd = command();

    if args.len() < 2 {
        return Ok(Parsed::Info(cmd.render_long_help().to_string()));
    }

    match cmd.try_get_matches_from_mut(args) {
        Ok(matches) => Ok(Parsed::Run(invocation_from(&matches))),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Parsed::Info(err.render().to_string()))
            }
            _ => Err(map_clap_error(&cmd, &err)),
        },
    }
}

fn invocation_from(matches: &ArgMatches) -> Invocation {
    let source = match matches
        .get_many::<String>("new")
        .and_then(|values| values.last())
    {
        Some(dimensions) => CanvasSource::Blank(dimensions.clone()),
        None => CanvasSource::Stdin,
    };

    let mut ordered: Vec<(usize, Step)> = Vec::new();
    for (id, flag) in DRAWING_ARGS {
        let (Some(indices), Some(values)) =
            (matches.indices_of(id), matches.get_many::<String>(id))
        else {
            continue;
        };
        for (index, value) in indices.zip(values) {
            ordered.push((
                index,
                Step {
                    flag,
                    value: value.clone(),
                },
            ));
        }
    }
    ordered.sort_by_key(|(index, _)| *index);

    let policy = if matches.get_flag("strict") {
        BoundsPolicy::Reject
    } else {
        BoundsPolicy::Clip
    };

    Invocation {
        source,
        show_only: matches.get_flag("show"),
        color: matches.get_flag("color"),
        steps: ordered.into_iter().map(|(_, step)| step).collect(),
        policy,
        format: matches
            .get_one::<OutputFormat>("format")
            .copied()
            .unwrap_or(OutputFormat::Text),
        no_color: matches.get_flag("no-color"),
    }
}

/// Maps clap's failures onto the canvascii error taxonomy.
fn map_clap_error(cmd: &Command, err: &clap::Error) -> CanvasError {
    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.as_str()),
        _ => None,
    };

    let rejected_value = match err.get(ContextKind::InvalidValue) {
        Some(ContextValue::String(value)) => !value.is_empty(),
        _ => false,
    };
    let option = || {
        invalid_arg
            .map(|arg| short_flag(cmd, arg))
            .unwrap_or_default()
    };

    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation if rejected_value => {
            CanvasError::InvalidValue { option: option() }
        }
        ErrorKind::InvalidValue
        | ErrorKind::NoEquals
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::TooFewValues
        | ErrorKind::MissingRequiredArgument => {
            CanvasError::MissingValue { option: option() }
        }
        _ => CanvasError::UnrecognizedOption(invalid_arg.unwrap_or_default().to_string()),
    }
}

/// Turns clap's rendering of an argument (`--horizontal <ROW>`) into the
/// short flag users know it by (`-h`).
fn short_flag(cmd: &Command, rendered: &str) -> String {
    let name = rendered.split_whitespace().next().unwrap_or(rendered);
    let Some(long) = name.strip_prefix("--") else {
        return name.to_string();
    };
    cmd.get_arguments()
        .find(|arg| arg.get_long() == Some(long))
        .and_then(Arg::get_short)
        .map(|short| format!("-{}", short))
        .unwrap_or_else(|| name.to_string())
}
