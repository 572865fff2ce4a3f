//! Error display for the CLI.

use colored::Colorize;
use inthash::IntHashError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let Some(id_err) = err.downcast_ref::<IntHashError>() else {
        return;
    };

    match id_err {
        e if e.is_missing_segment() => {
            eprintln!(
                "\n{}",
                "Hint: identifiers are written as <generation>$<hash>, e.g. 5$abc. \
                 Quote the argument so the shell does not expand `$`."
                    .yellow()
            );
        }
        IntHashError::UnsupportedInputType { .. } => {
            eprintln!(
                "\n{}",
                "Hint: only integers, strings and null can be read as an identifier.".yellow()
            );
        }
        _ => {}
    }
}
