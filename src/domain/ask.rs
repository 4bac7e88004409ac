use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an ask.
///
/// Bumps placed against an ask in an open state (pending acceptance or
/// active) are locked; they are only owed once the ask settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskStatus {
    PendingAcceptance,
    Active,
    Settled,
    Expired,
    NoStatus,
}

impl AskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AskStatus::PendingAcceptance => "pending_acceptance",
            AskStatus::Active => "active",
            AskStatus::Settled => "settled",
            AskStatus::Expired => "expired",
            AskStatus::NoStatus => "no_status",
        }
    }

    /// States whose bumps are locked rather than owed
    pub fn is_open(&self) -> bool {
        matches!(self, AskStatus::PendingAcceptance | AskStatus::Active)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AskStatus::Settled | AskStatus::Expired)
    }

    /// Validate a lifecycle transition.
    ///
    /// no_status -> pending_acceptance -> active -> settled; any open
    /// state may expire. Terminal states admit nothing.
    pub fn can_transition_to(&self, next: AskStatus) -> bool {
        match self {
            AskStatus::NoStatus => matches!(
                next,
                AskStatus::PendingAcceptance | AskStatus::Active | AskStatus::Expired
            ),
            AskStatus::PendingAcceptance => {
                matches!(next, AskStatus::Active | AskStatus::Expired)
            }
            AskStatus::Active => matches!(next, AskStatus::Settled | AskStatus::Expired),
            AskStatus::Settled => false,
            AskStatus::Expired => false,
        }
    }
}

impl std::fmt::Display for AskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for AskStatus {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            "pending_acceptance" => Ok(AskStatus::PendingAcceptance),
            "active" => Ok(AskStatus::Active),
            "settled" => Ok(AskStatus::Settled),
            "expired" => Ok(AskStatus::Expired),
            "no_status" => Ok(AskStatus::NoStatus),
            _ => Err(format!("Unknown ask status: {}", s)),
        }
    }
}

/// Visibility/auction kind of an ask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AskKind {
    Public,
    Private,
    BumpPublic,
}

impl AskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AskKind::Public => "PUBLIC",
            AskKind::Private => "PRIVATE",
            AskKind::BumpPublic => "BUMP_PUBLIC",
        }
    }
}

impl std::fmt::Display for AskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for AskKind {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            "PUBLIC" => Ok(AskKind::Public),
            "PRIVATE" => Ok(AskKind::Private),
            "BUMP_PUBLIC" => Ok(AskKind::BumpPublic),
            _ => Err(format!("Unknown ask kind: {}", s)),
        }
    }
}

/// A posted request that others bid on (bumps) or offer to fulfil
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ask {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ask_kind: AskKind,
    pub status: AskStatus,
    pub slug: String,
    pub title: String,
    /// Bidding deadline while pending acceptance / active
    pub deadline_at: DateTime<Utc>,
    /// Delivery deadline once an offer is accepted
    pub accepted_deadline_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Ask {
    /// Seconds until the bidding deadline, clamped at zero
    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.deadline_at - now).num_seconds().max(0)
    }

    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline_at
    }

    /// Open for bumps and offers
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ask_with(status: AskStatus, deadline_at: DateTime<Utc>) -> Ask {
        Ask {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            ask_kind: AskKind::Public,
            status,
            slug: "fix-my-roof".to_string(),
            title: "Fix my roof".to_string(),
            deadline_at,
            accepted_deadline_at: None,
            created_at: deadline_at - Duration::days(7),
        }
    }

    #[test]
    fn open_states_lock_bumps() {
        assert!(AskStatus::PendingAcceptance.is_open());
        assert!(AskStatus::Active.is_open());
        assert!(!AskStatus::Settled.is_open());
        assert!(!AskStatus::Expired.is_open());
        assert!(!AskStatus::NoStatus.is_open());
    }

    #[test]
    fn lifecycle_transitions() {
        assert!(AskStatus::NoStatus.can_transition_to(AskStatus::PendingAcceptance));
        assert!(AskStatus::PendingAcceptance.can_transition_to(AskStatus::Active));
        assert!(AskStatus::PendingAcceptance.can_transition_to(AskStatus::Expired));
        assert!(AskStatus::Active.can_transition_to(AskStatus::Settled));
        assert!(AskStatus::Active.can_transition_to(AskStatus::Expired));

        assert!(!AskStatus::PendingAcceptance.can_transition_to(AskStatus::Settled));
        assert!(!AskStatus::Settled.can_transition_to(AskStatus::Active));
        assert!(!AskStatus::Expired.can_transition_to(AskStatus::PendingAcceptance));
        assert!(!AskStatus::Active.can_transition_to(AskStatus::Active));
    }

    #[test]
    fn status_round_trips_through_db_strings() {
        for status in [
            AskStatus::PendingAcceptance,
            AskStatus::Active,
            AskStatus::Settled,
            AskStatus::Expired,
            AskStatus::NoStatus,
        ] {
            assert_eq!(AskStatus::try_from(status.as_str()), Ok(status));
        }
        assert!(AskStatus::try_from("SETTLED").is_err());
    }

    #[test]
    fn kind_round_trips_through_db_strings() {
        for kind in [AskKind::Public, AskKind::Private, AskKind::BumpPublic] {
            assert_eq!(AskKind::try_from(kind.as_str()), Ok(kind));
        }
        assert!(AskKind::try_from("bump_public").is_err());
    }

    #[test]
    fn seconds_remaining_clamps_at_zero() {
        let now = Utc::now();
        let ask = ask_with(AskStatus::Active, now - Duration::hours(1));
        assert!(ask.deadline_passed(now));
        assert_eq!(ask.seconds_remaining(now), 0);

        let ask = ask_with(AskStatus::Active, now + Duration::seconds(90));
        assert!(!ask.deadline_passed(now));
        assert_eq!(ask.seconds_remaining(now), 90);
    }
}
