//! Splits raw argv tokens into option flags and positional text.
//!
//! # Invariants
//! - Any token containing `-` is a flag candidate; leading `-` markers are
//!   stripped from it.
//! - When the first flag candidate is not a long name, only that first
//!   candidate is exploded into short flags. Later flag tokens are dropped,
//!   so `-N -v` behaves like `-N`.

use super::error::{CommandError, CommandResult};
use super::flag::Flag;

const FLAG_MARKER: char = '-';

/// Partitions `tokens` into `(flags, positionals)`, both in original order.
///
/// # Errors
/// - [`CommandError::Usage`] when `tokens` is empty.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> CommandResult<(Vec<String>, Vec<String>)> {
    if tokens.is_empty() {
        return Err(CommandError::Usage);
    }

    let mut candidates = Vec::new();
    let mut positionals = Vec::new();
    for token in tokens.iter().map(AsRef::as_ref) {
        if token.contains(FLAG_MARKER) {
            candidates.push(token.trim_start_matches(FLAG_MARKER).to_string());
        } else {
            positionals.push(token.to_string());
        }
    }

    Ok((expand_flags(candidates), positionals))
}

fn expand_flags(candidates: Vec<String>) -> Vec<String> {
    let Some(first) = candidates.first() else {
        return Vec::new();
    };

    if Flag::is_long_name(first) {
        return candidates;
    }

    first.chars().map(String::from).collect()
}

/// Resolves every flag name, failing on the first unknown one.
///
/// # Errors
/// - [`CommandError::InvalidOption`] naming the first unrecognized flag.
pub fn flag_check<S: AsRef<str>>(flags: &[S]) -> CommandResult<Vec<Flag>> {
    flags
        .iter()
        .map(|name| {
            let name = name.as_ref();
            Flag::from_name(name).ok_or_else(|| CommandError::InvalidOption(name.to_string()))
        })
        .collect()
}
