use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse commandline arguments and run the selected command
    if let Err(err) = kochflake::handle_cli_args(kochflake::args::parse_cli_args()) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
