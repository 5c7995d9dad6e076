use crate::config::app::{Lengths, Logging};
use crate::enums::LengthPolicy;

pub const DEFAULT_LENGTH_POLICY: LengthPolicy = LengthPolicy::Warn;
pub const DEFAULT_FINGERPRINT_LAYOUTS: bool = true;

pub fn default_lengths() -> Lengths {
    Lengths {
        policy: DEFAULT_LENGTH_POLICY,
    }
}

pub fn default_logging() -> Logging {
    Logging {
        fingerprint_layouts: DEFAULT_FINGERPRINT_LAYOUTS,
    }
}

pub fn default_fingerprint_layouts() -> bool {
    DEFAULT_FINGERPRINT_LAYOUTS
}
