//! rVisitCheck main entrypoint.

use rvisitcheck::run;
use rvisitcheck::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
