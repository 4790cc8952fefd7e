//! rStudioMetrics main entrypoint.

use rstudiometrics::run;
use rstudiometrics::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
