fn main() -> std::process::ExitCode {
    scaffolder_cli::run()
}
