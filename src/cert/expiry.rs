use crate::vault::certificates::CertificateAttributes;
use chrono::{DateTime, Duration, Utc};

/// Certificates expiring in fewer days than this are reported as a warning
pub const WARNING_DAYS: i64 = 30;

/// Certificates expiring in fewer days than this are reported as critical
pub const CRITICAL_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryStatus {
    NoExpiry,
    Disabled,
    Expired { days_ago: i64 },
    Critical { days: i64, expires: DateTime<Utc> },
    Warning { days: i64, expires: DateTime<Utc> },
    Healthy { days: i64, expires: DateTime<Utc> },
}

impl ExpiryStatus {
    /// Expired, critical and warning certificates need operator attention
    pub fn is_issue(&self) -> bool {
        matches!(
            self,
            Self::Expired { .. } | Self::Critical { .. } | Self::Warning { .. }
        )
    }
}

/// Whole days from `now` until `expires`, rounded down
pub fn days_until_expiry(expires: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let remaining = expires - now;
    let days = remaining.num_days();

    // num_days truncates toward zero
    if remaining < Duration::zero() && remaining != Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Classify a certificate against the fixed thresholds
pub fn classify(attributes: Option<&CertificateAttributes>, now: DateTime<Utc>) -> ExpiryStatus {
    let Some(attrs) = attributes else {
        return ExpiryStatus::NoExpiry;
    };
    let Some(expires) = attrs.expires else {
        return ExpiryStatus::NoExpiry;
    };

    if attrs.is_disabled() {
        return ExpiryStatus::Disabled;
    }

    let days = days_until_expiry(expires, now);
    match days {
        d if d < 0 => ExpiryStatus::Expired { days_ago: -d },
        d if d < CRITICAL_DAYS => ExpiryStatus::Critical { days, expires },
        d if d < WARNING_DAYS => ExpiryStatus::Warning { days, expires },
        _ => ExpiryStatus::Healthy { days, expires },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn expiring_at(expires: DateTime<Utc>) -> CertificateAttributes {
        CertificateAttributes {
            enabled: Some(true),
            expires: Some(expires),
            ..Default::default()
        }
    }

    fn classify_in(offset: Duration) -> ExpiryStatus {
        classify(Some(&expiring_at(now() + offset)), now())
    }

    #[test]
    fn test_days_round_down() {
        assert_eq!(days_until_expiry(now() + Duration::hours(36), now()), 1);
        assert_eq!(days_until_expiry(now() - Duration::hours(12), now()), -1);
        assert_eq!(days_until_expiry(now() - Duration::days(2), now()), -2);
        assert_eq!(days_until_expiry(now(), now()), 0);
    }

    #[test]
    fn test_any_past_expiry_is_expired() {
        assert_eq!(
            classify_in(-Duration::seconds(1)),
            ExpiryStatus::Expired { days_ago: 1 }
        );
        assert_eq!(
            classify_in(-Duration::nanoseconds(1)),
            ExpiryStatus::Expired { days_ago: 1 }
        );
        assert_eq!(
            classify_in(-Duration::days(10) - Duration::hours(1)),
            ExpiryStatus::Expired { days_ago: 11 }
        );
    }

    #[test]
    fn test_critical_window() {
        let expires = now() + Duration::hours(1);
        assert_eq!(
            classify_in(Duration::hours(1)),
            ExpiryStatus::Critical { days: 0, expires }
        );
        assert!(matches!(
            classify_in(Duration::days(6) + Duration::hours(23)),
            ExpiryStatus::Critical { days: 6, .. }
        ));
    }

    #[test]
    fn test_warning_window() {
        assert!(matches!(
            classify_in(Duration::days(7)),
            ExpiryStatus::Warning { days: 7, .. }
        ));
        assert!(matches!(
            classify_in(Duration::days(29) + Duration::hours(23)),
            ExpiryStatus::Warning { days: 29, .. }
        ));
    }

    #[test]
    fn test_healthy_from_thirty_days() {
        let status = classify_in(Duration::days(WARNING_DAYS));
        assert!(matches!(status, ExpiryStatus::Healthy { days: 30, .. }));
        assert!(!status.is_issue());

        assert!(matches!(
            classify_in(Duration::days(400)),
            ExpiryStatus::Healthy { days: 400, .. }
        ));
    }

    #[test]
    fn test_disabled_wins_over_expiry() {
        let attrs = CertificateAttributes {
            enabled: Some(false),
            expires: Some(now() - Duration::days(100)),
            ..Default::default()
        };
        let status = classify(Some(&attrs), now());
        assert_eq!(status, ExpiryStatus::Disabled);
        assert!(!status.is_issue());
    }

    #[test]
    fn test_missing_expiry_wins_over_everything() {
        let disabled_without_expiry = CertificateAttributes {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(
            classify(Some(&disabled_without_expiry), now()),
            ExpiryStatus::NoExpiry
        );
        assert_eq!(classify(None, now()), ExpiryStatus::NoExpiry);
        assert!(!ExpiryStatus::NoExpiry.is_issue());
    }

    #[test]
    fn test_unknown_enabled_flag_is_not_disabled() {
        let attrs = CertificateAttributes {
            enabled: None,
            expires: Some(now() + Duration::days(90)),
            ..Default::default()
        };
        assert!(matches!(
            classify(Some(&attrs), now()),
            ExpiryStatus::Healthy { .. }
        ));
    }

    #[test]
    fn test_issue_classification() {
        assert!(classify_in(-Duration::days(1)).is_issue());
        assert!(classify_in(Duration::days(3)).is_issue());
        assert!(classify_in(Duration::days(20)).is_issue());
    }
}
