use rust_decimal::Decimal;

use crate::domain::AskKind;
use crate::ledger::constants::{BUMP_PUBLIC_MIN_BUMP_FACTOR, GLOBAL_MIN_BUMP_SATS};

/// Minimum acceptable next bump for an ask, in sats.
///
/// PUBLIC and PRIVATE asks use the fixed global floor. BUMP_PUBLIC asks
/// escalate: the next bid must scale with the current pool total.
pub fn min_bump_for_ask(current_pool_sats: i64, ask_kind: AskKind) -> Decimal {
    match ask_kind {
        AskKind::Public | AskKind::Private => Decimal::from(GLOBAL_MIN_BUMP_SATS),
        AskKind::BumpPublic => Decimal::from(current_pool_sats) * BUMP_PUBLIC_MIN_BUMP_FACTOR,
    }
}
