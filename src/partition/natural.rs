//! # Natural string ordering for listing titles.
//!
//! [`natural_cmp`] compares strings the way humans read version-ish names:
//! runs of ASCII digits compare by numeric value rather than lexicographically,
//! so `"input2"` sorts before `"input10"`. Letters compare case-insensitively
//! on the case-folded form.
//!
//! The comparison is a total order suitable for `sort_by`. Strings that differ
//! only in case or in leading zeros of a digit run compare as equal; a stable
//! sort then preserves their incoming relative order, which is exactly the
//! tie-breaking contract listings rely on.
//!
//! # Example
//! ```rust
//! use std::cmp::Ordering;
//! use inputvisor::natural_cmp;
//!
//! assert_eq!(natural_cmp("input2", "input10"), Ordering::Less);
//! assert_eq!(natural_cmp("Input2", "input2"), Ordering::Equal);
//! assert_eq!(natural_cmp("2", "10"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two strings in case-insensitive natural order.
///
/// Walks both case-folded strings in lockstep. When both cursors sit on an
/// ASCII digit, the full digit runs are consumed and compared by numeric
/// value; otherwise single characters compare lexicographically. Shorter
/// strings sort before their extensions (`"input"` before `"input2"`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_x = take_digit_run(&mut xs);
                let run_y = take_digit_run(&mut ys);
                match cmp_digit_runs(&run_x, &run_y) {
                    Ordering::Equal => continue,
                    decided => return decided,
                }
            }
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => {
                    xs.next();
                    ys.next();
                }
                decided => return decided,
            },
        }
    }
}

/// Consumes a maximal run of ASCII digits from the cursor.
fn take_digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compares two digit runs by numeric value, without parsing into an integer.
///
/// Leading zeros are stripped; the longer remaining run is the larger number,
/// and equal-length runs compare digit-wise. Works for runs of any length, so
/// absurdly long "numbers" never overflow anything.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut titles: Vec<&str>) -> Vec<&str> {
        titles.sort_by(|a, b| natural_cmp(a, b));
        titles
    }

    #[test]
    fn digit_runs_compare_by_numeric_value() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("input2", "input10"), Ordering::Less);
        assert_eq!(natural_cmp("input10", "input2"), Ordering::Greater);
    }

    #[test]
    fn mixed_case_titles_interleave() {
        assert_eq!(
            sorted(vec!["Input10", "Input2", "input1"]),
            vec!["input1", "Input2", "Input10"]
        );
    }

    #[test]
    fn letters_compare_case_insensitively() {
        assert_eq!(natural_cmp("syslog", "SYSLOG"), Ordering::Equal);
        assert_eq!(natural_cmp("Beats", "syslog"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_do_not_change_the_value() {
        assert_eq!(natural_cmp("input007", "input7"), Ordering::Equal);
        assert_eq!(natural_cmp("input007", "input8"), Ordering::Less);
        assert_eq!(natural_cmp("input010", "input9"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_before_extension() {
        assert_eq!(natural_cmp("input", "input2"), Ordering::Less);
        assert_eq!(natural_cmp("input2", "input"), Ordering::Greater);
    }

    #[test]
    fn comparison_continues_past_equal_runs() {
        assert_eq!(natural_cmp("node1-gelf", "node1-raw"), Ordering::Less);
        assert_eq!(natural_cmp("node2-gelf", "node10-gelf"), Ordering::Less);
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(sorted(vec!["b", "2", "a", "10"]), vec!["2", "10", "a", "b"]);
    }

    #[test]
    fn empty_string_sorts_first() {
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn huge_digit_runs_do_not_overflow() {
        let small = "input99999999999999999999999999999999999999";
        let large = "input100000000000000000000000000000000000000";
        assert_eq!(natural_cmp(small, large), Ordering::Less);
    }
}
