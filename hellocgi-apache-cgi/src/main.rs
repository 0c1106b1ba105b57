use std::io;
use std::process::ExitCode;

use hellocgi_parser::{
    config::Config,
    logging,
    request::CgiRequest,
    serve::{serve_content, write_error_response, write_response},
};
use tracing::{error, warn};

fn main() -> ExitCode {
    let (config, load_error) = Config::load_or_default();
    logging::init(&config.logging.filter);
    if let Some(e) = load_error {
        warn!(
            path = %Config::config_file_path().display(),
            "Failed to load config, using defaults: {e:#}"
        );
    }

    let request = CgiRequest::from_env();
    let mut stdout = io::stdout().lock();

    let result = serve_content(&request, &config).and_then(|page| write_response(&mut stdout, &page));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to serve {}: {e:#}", request.path_info);
            if let Err(e) = write_error_response(&mut stdout, &e) {
                error!("Failed to write error response: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
