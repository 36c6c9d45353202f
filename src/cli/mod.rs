mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::PlotError;

pub fn run() -> Result<(), PlotError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Basic(a) => handlers::basic(a),
        parse::Command::Multi(a) => handlers::multi(a),
        parse::Command::Settings(a) => handlers::settings(a),
        parse::Command::Ascii(a) => handlers::ascii(a),
        parse::Command::Csv(a) => handlers::csv(a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Brushes => {
            handlers::brushes();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
