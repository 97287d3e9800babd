//! sfxkit CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = sfxkit::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
