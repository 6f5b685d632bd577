use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AGE_EXPIRY_DAYS;

/// Persisted proof that the visitor confirmed their age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub verified: bool,
    /// Epoch milliseconds.
    pub expiry: i64,
}

impl VerificationRecord {
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self {
            verified: true,
            expiry: (now + Duration::days(AGE_EXPIRY_DAYS)).timestamp_millis(),
        }
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.verified && now.timestamp_millis() < self.expiry
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn issued_record_expires_thirty_days_later() {
        let now = at(1_700_000_000_000);
        let record = VerificationRecord::issue(now);
        assert!(record.verified);
        assert_eq!(record.expiry, 1_700_000_000_000 + 30 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn validity_is_strictly_before_expiry() {
        let record = VerificationRecord { verified: true, expiry: 1_000 };
        assert!(record.is_valid_at(at(999)));
        assert!(!record.is_valid_at(at(1_000)));
        assert!(!record.is_valid_at(at(1_001)));
    }

    #[test]
    fn unverified_record_is_never_valid() {
        let record = VerificationRecord { verified: false, expiry: i64::MAX };
        assert!(!record.is_valid_at(at(0)));
    }

    #[test]
    fn reads_the_stored_shape() {
        let record = VerificationRecord::from_json(r#"{"verified":true,"expiry":1234}"#).unwrap();
        assert_eq!(record, VerificationRecord { verified: true, expiry: 1234 });
        assert!(VerificationRecord::from_json("{\"verified\":true}").is_err());
        assert!(VerificationRecord::from_json("not json").is_err());
    }
}
