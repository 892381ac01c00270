#![forbid(unsafe_code)]
/*!
 Report the byte sizes of Objective-C style type encodings.
*/

use std::process::exit;

mod app;
mod reporters;

use app::{
    options::{from_command_line, Options},
    runtime::Config,
};

fn main() {
    // Get args from command line
    let args = from_command_line();
    // Create application options
    let options = Options::from_args(&args);

    // Create app state and start
    match options {
        Ok(options) => {
            let config = Config::new(options);
            if let Err(why) = config.start() {
                eprintln!("Unable to report: {why}");
                exit(1);
            }
        }
        Err(why) => {
            eprintln!("{why}");
            exit(1);
        }
    }
}
