//! Handle extraction and cleanup for the local part of an email address.

/// Sentinel returned whenever no usable handle can be derived.
pub const UNKNOWN: &str = "UNKNOWN";

/// Runs of this many identical characters (or more) are treated as noise.
const FREQUENT_RUN_LEN: usize = 3;

/// Extract the local part of an email, keep ASCII letters only and uppercase them.
/// Returns [`UNKNOWN`] for a missing address, one without `@`, or an empty result.
pub fn process_handle(email: Option<&str>) -> String {
    let Some(email) = email else {
        return UNKNOWN.to_string();
    };
    let Some((local, _domain)) = email.split_once('@') else {
        return UNKNOWN.to_string();
    };
    let handle: String = local
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if handle.is_empty() {
        UNKNOWN.to_string()
    } else {
        handle
    }
}

/// Drop every run of three or more identical consecutive characters.
/// Shorter runs are kept verbatim; an empty input or output yields [`UNKNOWN`].
pub fn remove_frequent_letters(handle: Option<&str>) -> String {
    let Some(handle) = handle.filter(|h| !h.is_empty()) else {
        return UNKNOWN.to_string();
    };

    let mut cleaned = String::with_capacity(handle.len());
    let mut chars = handle.chars();
    // Non-empty checked above
    let Some(mut prev) = chars.next() else {
        return UNKNOWN.to_string();
    };
    let mut count = 1usize;
    for ch in chars {
        if ch == prev {
            count += 1;
            continue;
        }
        push_run(&mut cleaned, prev, count);
        prev = ch;
        count = 1;
    }
    push_run(&mut cleaned, prev, count);

    if cleaned.is_empty() {
        UNKNOWN.to_string()
    } else {
        cleaned
    }
}

#[inline]
fn push_run(out: &mut String, ch: char, count: usize) {
    if count < FREQUENT_RUN_LEN {
        out.extend(std::iter::repeat_n(ch, count));
    }
}

/// Full handle pipeline used by the matcher: extract, then collapse noisy runs.
pub fn collapsed_handle(email: Option<&str>) -> String {
    let handle = process_handle(email);
    remove_frequent_letters(Some(&handle))
}
