//! Print a greeting to stdout and exit.
//!
//! Any command-line arguments are ignored.

fn main() {
    std::process::exit(greeter::program::main())
}
