use std::env;
use std::ffi::OsString;
use std::process;

use colordu::config::Config;
use colordu::runner;

fn main() {
    let config = Config::from_env();
    // Every argument belongs to du; colordu defines no flags of its own.
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match runner::run(&config, &args) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("colordu: {err:#}");
            process::exit(127);
        }
    }
}
