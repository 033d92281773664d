//! prdlog main entrypoint.

use prdlog::run;

fn main() {
    if let Err(e) = run() {
        prdlog::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
