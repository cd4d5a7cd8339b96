//! Regex-driven masking of emails, phone numbers, and IPv4 addresses.

pub mod error;
pub mod mask;
pub mod masker;

pub use error::{PiiError, Result};
pub use mask::{mask_emails, mask_ips, mask_phone_numbers, EMAIL_PLACEHOLDER, IP_PLACEHOLDER, PHONE_PLACEHOLDER};
pub use masker::{PiiCounts, PiiMasker};
