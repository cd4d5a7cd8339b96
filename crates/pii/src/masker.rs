use crate::mask::{mask_emails, mask_ips, mask_phone_numbers};
use serde::{Deserialize, Serialize};

/// Per-document counts of each PII kind masked.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PiiCounts {
    pub emails: u64,
    pub phone_numbers: u64,
    pub ips: u64,
}

impl PiiCounts {
    pub fn total(&self) -> u64 {
        self.emails + self.phone_numbers + self.ips
    }
}

/// Runs all three masking passes over a document in sequence: emails, then
/// phone numbers, then IPv4 addresses.
#[derive(Debug, Default, Clone, Copy)]
pub struct PiiMasker;

impl PiiMasker {
    pub fn new() -> Self {
        Self
    }

    pub fn mask(&self, text: &str) -> (String, PiiCounts) {
        let (text, emails) = mask_emails(text);
        let (text, phone_numbers) = mask_phone_numbers(&text);
        let (text, ips) = mask_ips(&text);
        let counts = PiiCounts {
            emails: emails as u64,
            phone_numbers: phone_numbers as u64,
            ips: ips as u64,
        };
        if counts.total() > 0 {
            log::debug!(
                "pii: masked {} email(s), {} phone number(s), {} ip(s)",
                counts.emails,
                counts.phone_numbers,
                counts.ips
            );
        }
        (text, counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn masks_all_kinds_in_one_call() {
        let masker = PiiMasker::new();
        let (out, counts) =
            masker.mask("Contact me at foo@bar.com or (555) 123-4567, IP 192.168.0.1.");
        assert_eq!(
            out,
            "Contact me at |||EMAIL_ADDRESS||| or |||PHONE_NUMBER|||, IP |||IP_ADDRESS|||."
        );
        assert_eq!(
            counts,
            PiiCounts {
                emails: 1,
                phone_numbers: 1,
                ips: 1
            }
        );
    }

    #[test]
    fn idempotent_across_two_full_passes() {
        let masker = PiiMasker::new();
        let (once, _) = masker.mask("foo@bar.com, (555) 123-4567, 10.0.0.1");
        let (twice, counts_twice) = masker.mask(&once);
        assert_eq!(once, twice);
        assert_eq!(counts_twice, PiiCounts::default());
    }
}
