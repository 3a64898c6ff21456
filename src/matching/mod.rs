//! Email handle / person name matching.
//!
//! The decision pipeline is:
//! 1. extract the email local part and keep uppercase ASCII letters
//!    ([`process_handle`](crate::normalize::process_handle));
//! 2. drop runs of three or more identical letters
//!    ([`remove_frequent_letters`](crate::normalize::remove_frequent_letters));
//! 3. rewrite and tokenize the full name ([`phonetic::process_name`]);
//! 4. for every ordered token pair, look for a fragment or fragment pair that
//!    is valid against the handle ([`fragments::check_if_combination_in_handle`]).
//!
//! Every function here is pure; [`match_all`] fans records out over rayon.

use log::debug;
use rayon::prelude::*;

use crate::models::{Candidate, MatchOutcome};
use crate::normalize::{UNKNOWN, collapsed_handle};

pub mod fragments;
pub mod phonetic;

pub use fragments::{check_if_combination_in_handle, consecutive_substrings, is_valid};
pub use phonetic::{process_name, replace_combinations};

/// Decide whether the email's handle plausibly encodes the given first and last name.
pub fn compare_email_name(
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> bool {
    let handle = collapsed_handle(email);
    if handle == UNKNOWN {
        debug!("no usable handle in {:?}", email);
        return false;
    }
    matches_handle(&handle, first_name, last_name)
}

/// Stands in for an absent first or last name so the present one still pairs with a token.
const ABSENT_NAME: &str = "null";

/// Token-pair search against an already collapsed handle.
fn matches_handle(handle: &str, first_name: Option<&str>, last_name: Option<&str>) -> bool {
    let full_name = format!(
        "{} {}",
        first_name.unwrap_or(ABSENT_NAME),
        last_name.unwrap_or(ABSENT_NAME)
    );
    let tokens = process_name(Some(&full_name));
    for (i, left) in tokens.iter().enumerate() {
        for right in &tokens[i + 1..] {
            if check_if_combination_in_handle(left, right, handle) {
                debug!("handle {} matched tokens {} / {}", handle, left, right);
                return true;
            }
        }
    }
    debug!("handle {} matched none of {:?}", handle, tokens);
    false
}

/// Evaluate a single candidate, keeping the collapsed handle for reporting.
pub fn evaluate(candidate: &Candidate) -> MatchOutcome {
    let handle = collapsed_handle(candidate.email.as_deref());
    let matched = handle != UNKNOWN
        && matches_handle(
            &handle,
            candidate.first_name.as_deref(),
            candidate.last_name.as_deref(),
        );
    MatchOutcome {
        id: candidate.id.clone(),
        email: candidate.email.clone(),
        first_name: candidate.first_name.clone(),
        last_name: candidate.last_name.clone(),
        handle,
        matched,
    }
}

/// Evaluate all candidates in parallel; output order follows input order.
pub fn match_all(candidates: &[Candidate]) -> Vec<MatchOutcome> {
    candidates.par_iter().map(evaluate).collect()
}
