//! Regex-driven PII masking. The `regex` crate has no lookaround, so the
//! "must not match inside a larger word/digit run" discipline normally
//! expressed with `(?<!\w)...(?!\w)` is instead enforced by checking the
//! characters immediately surrounding each candidate match in Rust, then
//! only substituting matches that pass.

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_PLACEHOLDER: &str = "|||EMAIL_ADDRESS|||";
pub const PHONE_PLACEHOLDER: &str = "|||PHONE_NUMBER|||";
pub const IP_PLACEHOLDER: &str = "|||IP_ADDRESS|||";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}")
        .expect("static pattern is valid")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?:\+1[\s.-]?)?       # optional country code
        \(?\d{3}\)?           # area code, parens optional
        [\s.-]?               # optional separator
        \d{3}                 # first 3 digits
        [\s.-]?               # optional separator
        \d{4}                 # last 4 digits
        ",
    )
    .expect("static pattern is valid")
});

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?:
            (?:25[0-5]|2[0-4]\d|1\d{2}|[1-9]?\d)
            \.
        ){3}
        (?:25[0-5]|2[0-4]\d|1\d{2}|[1-9]?\d)
        ",
    )
    .expect("static pattern is valid")
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every match of `re` in `text` with `placeholder`, skipping any
/// match whose immediately-surrounding character fails `boundary_ok`
/// (emulating a regex lookaround the `regex` crate doesn't support).
fn mask_with_boundary<F>(text: &str, re: &Regex, placeholder: &str, boundary_ok: F) -> (String, usize)
where
    F: Fn(char) -> bool,
{
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut count = 0;

    for m in re.find_iter(text) {
        let before_ok = text[..m.start()]
            .chars()
            .next_back()
            .map_or(true, |c| !boundary_ok(c));
        let after_ok = text[m.end()..]
            .chars()
            .next()
            .map_or(true, |c| !boundary_ok(c));

        if before_ok && after_ok {
            out.push_str(&text[last_end..m.start()]);
            out.push_str(placeholder);
            last_end = m.end();
            count += 1;
        }
    }
    out.push_str(&text[last_end..]);
    (out, count)
}

/// Mask email addresses. No extra boundary discipline is needed: the
/// character class already consumes a maximal local-part run.
pub fn mask_emails(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut count = 0;
    for m in EMAIL_REGEX.find_iter(text) {
        out.push_str(&text[last_end..m.start()]);
        out.push_str(EMAIL_PLACEHOLDER);
        last_end = m.end();
        count += 1;
    }
    out.push_str(&text[last_end..]);
    (out, count)
}

/// Mask US-style phone numbers. Must not match inside a larger
/// word-character run.
pub fn mask_phone_numbers(text: &str) -> (String, usize) {
    mask_with_boundary(text, &PHONE_REGEX, PHONE_PLACEHOLDER, is_word_char)
}

/// Mask IPv4 dotted-quad addresses. Must not match inside a longer digit run.
pub fn mask_ips(text: &str) -> (String, usize) {
    mask_with_boundary(text, &IPV4_REGEX, IP_PLACEHOLDER, |c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scenario_e_masks_all_three_kinds() {
        let input = "Contact me at foo@bar.com or (555) 123-4567, IP 192.168.0.1.";
        let (after_email, email_ct) = mask_emails(input);
        let (after_phone, phone_ct) = mask_phone_numbers(&after_email);
        let (after_ip, ip_ct) = mask_ips(&after_phone);

        assert_eq!(
            after_ip,
            "Contact me at |||EMAIL_ADDRESS||| or |||PHONE_NUMBER|||, IP |||IP_ADDRESS|||."
        );
        assert_eq!((email_ct, phone_ct, ip_ct), (1, 1, 1));
    }

    #[test]
    fn phone_does_not_match_inside_longer_digit_word_run() {
        let input = "order number ABC5551234567XYZ stays untouched";
        let (out, ct) = mask_phone_numbers(input);
        assert_eq!(ct, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn ip_does_not_match_inside_longer_digit_run() {
        let input = "version 11192.168.0.14 build";
        let (out, ct) = mask_ips(input);
        assert_eq!(ct, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn masking_twice_is_idempotent() {
        let input = "Email foo@bar.com, phone (555) 123-4567, ip 10.0.0.1.";
        let (e1, _) = mask_emails(input);
        let (p1, _) = mask_phone_numbers(&e1);
        let (once, _) = mask_ips(&p1);

        let (e2, _) = mask_emails(&once);
        let (p2, _) = mask_phone_numbers(&e2);
        let (twice, _) = mask_ips(&p2);

        assert_eq!(once, twice);
    }
}
