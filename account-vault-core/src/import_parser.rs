//! Pasted-text import parser.
//!
//! Each non-blank line becomes one candidate. Fields are separated by the first delimiter
//! found in priority order: the full-width double dash, then `----`, then `--`. A line with
//! none of them is taken as a bare email. Parsing never fails; a malformed line degrades
//! to an email-only candidate and validity is judged by the caller.

use crate::types::{AccountImportCandidate, ActivationStatus, SingleImportForm, SingleImportOutcome};
use crate::utils::text::{strip_all_whitespace, trim_blank};

/// Delimiters in priority order. Priority is fixed, not by length or position.
const DELIMITERS: [&str; 3] = [
    // Full-width double dash typed by Chinese input methods.
    "\u{2014}\u{2014}",
    "----",
    "--",
];

/// Picks the delimiter for one line, `None` when the line is a single field.
fn detect_delimiter(line: &str) -> Option<&'static str> {
    DELIMITERS.into_iter().find(|d| line.contains(d))
}

/// Builds a candidate from positional parts: email, password, recovery, secret, remark.
fn candidate_from_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> AccountImportCandidate {
    let mut parts = parts.into_iter().map(trim_blank);
    let mut next = || parts.next().unwrap_or_default().to_string();

    let email = next();
    let password = next();
    let recovery = next();
    let secret = strip_all_whitespace(&next());
    let remark = next();

    AccountImportCandidate {
        email,
        password,
        recovery,
        secret,
        remark,
        status: ActivationStatus::Inactive,
    }
}

/// Parses one line into a candidate.
#[must_use]
pub fn parse_line(line: &str) -> AccountImportCandidate {
    match detect_delimiter(line) {
        Some(delimiter) => candidate_from_parts(line.split(delimiter)),
        None => candidate_from_parts([line]),
    }
}

/// Parses pasted text into one candidate per non-blank line, in input order.
///
/// Candidates missing email or password are still returned.
#[must_use]
pub fn parse_batch(raw: &str) -> Vec<AccountImportCandidate> {
    let candidates: Vec<_> = raw
        .lines()
        .filter(|line| !trim_blank(line).is_empty())
        .map(parse_line)
        .collect();

    log::debug!(
        "Parsed {} import candidates ({} importable)",
        candidates.len(),
        candidates.iter().filter(|c| c.is_importable()).count()
    );
    candidates
}

/// Normalizes the single-account form.
///
/// Returns [`SingleImportOutcome::Blocked`] when email or password is empty after trimming.
#[must_use]
pub fn parse_single(form: &SingleImportForm) -> SingleImportOutcome {
    let candidate = AccountImportCandidate {
        email: trim_blank(&form.email).to_string(),
        password: trim_blank(&form.password).to_string(),
        recovery: trim_blank(&form.recovery).to_string(),
        secret: strip_all_whitespace(&form.secret),
        remark: String::new(),
        status: ActivationStatus::Inactive,
    };

    if candidate.is_importable() {
        SingleImportOutcome::Ready(vec![candidate])
    } else {
        SingleImportOutcome::Blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> SingleImportForm {
        SingleImportForm {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn wide_dash_line_strips_secret_spaces() {
        let parsed = parse_batch("a@x.com——p1——r1——SEC RET");
        assert_eq!(parsed.len(), 1);
        let c = &parsed[0];
        assert_eq!(c.email, "a@x.com");
        assert_eq!(c.password, "p1");
        assert_eq!(c.recovery, "r1");
        assert_eq!(c.secret, "SECRET");
        assert_eq!(c.remark, "");
        assert_eq!(c.status, ActivationStatus::Inactive);
    }

    #[test]
    fn wide_dash_wins_over_ascii_runs() {
        let c = parse_line("a--b@x.com——pass----word——r@x.com");
        assert_eq!(c.email, "a--b@x.com");
        assert_eq!(c.password, "pass----word");
        assert_eq!(c.recovery, "r@x.com");
    }

    #[test]
    fn quad_dash_wins_over_double_dash() {
        let c = parse_line("a@x.com----p--1----r@x.com----ABCD EFGH----vip");
        assert_eq!(c.email, "a@x.com");
        assert_eq!(c.password, "p--1");
        assert_eq!(c.recovery, "r@x.com");
        assert_eq!(c.secret, "ABCDEFGH");
        assert_eq!(c.remark, "vip");
    }

    #[test]
    fn double_dash_line() {
        let c = parse_line(" a@x.com -- p1 ");
        assert_eq!(c.email, "a@x.com");
        assert_eq!(c.password, "p1");
        assert_eq!(c.recovery, "");
    }

    #[test]
    fn line_without_delimiter_is_email_only() {
        let parsed = parse_batch("justanemail");
        assert_eq!(
            parsed,
            vec![AccountImportCandidate {
                email: "justanemail".to_string(),
                ..Default::default()
            }]
        );
        assert!(!parsed[0].is_importable());
    }

    #[test]
    fn extra_parts_beyond_remark_are_ignored() {
        let c = parse_line("e----p----r----s----remark----extra");
        assert_eq!(c.remark, "remark");
    }

    #[test]
    fn blank_lines_dropped_and_order_kept() {
        let parsed = parse_batch("first@x.com----p1\n\n   \r\nsecond@x.com----p2\r\nthird\n");
        let emails: Vec<_> = parsed.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, ["first@x.com", "second@x.com", "third"]);
        assert_eq!(parsed[1].password, "p2");
    }

    #[test]
    fn invalid_candidates_are_still_returned() {
        let parsed = parse_batch("----p1\na@x.com----");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].email, "");
        assert_eq!(parsed[1].password, "");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_batch("").is_empty());
        assert!(parse_batch("\n \n\t").is_empty());
    }

    #[test]
    fn parsing_is_repeatable() {
        let raw = "a@x.com——p——r——S E C\nb@x.com--q";
        assert_eq!(parse_batch(raw), parse_batch(raw));
    }

    #[test]
    fn byte_order_mark_is_trimmed_like_whitespace() {
        let c = parse_line("\u{feff}a@x.com----p----r----AB\u{feff}CD");
        assert_eq!(c.email, "a@x.com");
        assert_eq!(c.secret, "ABCD");

        let parsed = parse_batch("\u{feff}\nb@x.com--q");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].email, "b@x.com");

        assert!(parse_single(&form("\u{feff}", "p")).is_blocked());
    }

    #[test]
    fn single_blocked_without_email_or_password() {
        assert!(parse_single(&form("", "p")).is_blocked());
        assert!(parse_single(&form("e", "   ")).is_blocked());
    }

    #[test]
    fn single_ready_trims_and_strips_secret() {
        let outcome = parse_single(&SingleImportForm {
            email: " e ".to_string(),
            password: "p".to_string(),
            recovery: " r@x.com ".to_string(),
            secret: " abcd efgh ".to_string(),
        });
        let SingleImportOutcome::Ready(candidates) = outcome else {
            panic!("expected ready outcome");
        };
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].email, "e");
        assert_eq!(candidates[0].recovery, "r@x.com");
        assert_eq!(candidates[0].secret, "abcdefgh");
        assert_eq!(candidates[0].remark, "");
    }
}
