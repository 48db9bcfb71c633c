use latency_histogram_plot::args::Args;
use latency_histogram_plot::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    match latency_histogram_plot::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
