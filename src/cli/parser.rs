use super::{CliArgs, CliCommand, CliError};

pub const USAGE: &str = "\
usage: cross_word [-h] [-a] [-p PHRASE] [-d] [position]

Lay out the words of a phrase as a crossword.

positional arguments:
  position              Run specific example. Allowed negatives

options:
  -h, --help            show this help message and exit
  -a, --all             Run all the examples
  -p, --phrase PHRASE   Run on phrase
  -d, --dry             Do not run generator, just print phrase";

const EXACTLY_ONE: &str = "Exactly one of --all, position or --phrase [PHRASE] must be provided";

/// Parse command-line arguments (program name excluded).
///
/// Supports:
/// - `-a` / `--all` → every example
/// - `N` (may be negative) → one example
/// - `-p PHRASE`, `--phrase PHRASE`, `--phrase=PHRASE` → custom phrase
/// - `-d` / `--dry` → print phrases only
/// - `-h` / `--help` → usage
///
/// Exactly one of all/position/phrase must be given.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<CliArgs, CliError> {
    let mut all = false;
    let mut dry = false;
    let mut position: Option<i64> = None;
    let mut phrase: Option<String> = None;

    let mut args = args.iter().map(|arg| arg.as_ref());
    while let Some(arg) = args.next() {
        match arg {
            "-h" | "--help" => return Ok(CliArgs::new(CliCommand::Help)),
            "-a" | "--all" => all = true,
            "-d" | "--dry" => dry = true,
            "-p" | "--phrase" => {
                let value = args.next().ok_or_else(|| {
                    CliError::Usage("argument -p/--phrase: expected one argument".to_string())
                })?;
                phrase = Some(value.to_string());
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--phrase=") {
                    phrase = Some(value.to_string());
                } else if let Ok(number) = arg.parse::<i64>() {
                    if position.replace(number).is_some() {
                        return Err(CliError::Usage(format!("unrecognized arguments: {arg}")));
                    }
                } else if arg.starts_with('-') {
                    return Err(CliError::Usage(format!("unrecognized arguments: {arg}")));
                } else {
                    return Err(CliError::Usage(format!(
                        "argument position: invalid int value: '{arg}'"
                    )));
                }
            }
        }
    }

    let provided = [all, position.is_some(), phrase.is_some()]
        .into_iter()
        .filter(|&given| given)
        .count();
    if provided != 1 {
        return Err(CliError::Usage(EXACTLY_ONE.to_string()));
    }

    let command = match (phrase, position) {
        (Some(phrase), _) => CliCommand::Phrase(phrase),
        (None, Some(position)) => CliCommand::Example(position),
        (None, None) => CliCommand::All,
    };

    Ok(CliArgs { command, dry })
}
