use gui_test_runner::models::RunnerError;
use gui_test_runner::reporting::console;
use gui_test_runner::cli;
use std::process::ExitCode;
use std::time::Instant;

#[tokio::main]
async fn main() -> ExitCode {
    let start_time = Instant::now();

    // Run the whole linear flow; errors bubble here uncaught by any
    // local recovery.
    let code = match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console::print_error(&e);
            let code = e
                .downcast_ref::<RunnerError>()
                .map(RunnerError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    };

    // The elapsed-time line is printed on both success and error paths,
    // immediately before exiting.
    console::print_elapsed(start_time.elapsed());

    code
}
