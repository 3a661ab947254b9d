use std::process::ExitCode;

use salary_ensemble::app;

fn main() -> ExitCode {
    if let Err(err) = app::run() {
        eprintln!("salary: {err}");
        return ExitCode::from(err.exit_code());
    }
    ExitCode::SUCCESS
}
