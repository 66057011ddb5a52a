//! rattendance main entrypoint.

use rattendance::run;
use rattendance::ui::messages::{error, info};

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        if e.is_storage() {
            info("Nothing was changed. Check the configured paths with `rattendance config --print`.");
        }
        std::process::exit(1);
    }
}
