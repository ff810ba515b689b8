use cross_word::cli::{parse_args, App, USAGE};
use crossterm::tty::IsTty;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    cross_word::logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(args.as_slice()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{USAGE}");
            eprintln!("cross_word: error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    let stdout = io::stdout();
    let app = App::new(stdout.is_tty());
    let mut out = stdout.lock();

    match app.run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cross_word: error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
