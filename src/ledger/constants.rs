use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Milli-satoshis per satoshi; transaction amounts are stored in msats
pub const MSATS_UNIT_FACTOR: i64 = 1000;

/// Maximum unresolved invoices a user may hold within the trailing window
pub const INVOICE_LIMIT: i64 = 3;

/// Trailing window, in seconds, for the unresolved-invoice count
pub const TRANSACTION_MAX_AGE: i64 = 600;

/// Cooldown, in seconds, between settled transactions of the same kind
pub const TRANSACTION_FREQUENCY_SECONDS_LIMIT: i64 = 30;

/// Floor for bumps on PUBLIC and PRIVATE asks, in sats
pub const GLOBAL_MIN_BUMP_SATS: i64 = 10;

/// BUMP_PUBLIC asks escalate: the next bump must exceed the current pool
/// by this factor
pub const BUMP_PUBLIC_MIN_BUMP_FACTOR: Decimal = dec!(1.1);

/// Fixed fraction of every settled payout retained by the bank
pub const BANK_FEE: Decimal = dec!(0.1);

/// Share of the bump pool the accepted offer's author receives
pub const PAYOUT_FACTOR: Decimal = dec!(0.9);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_factor_complements_bank_fee() {
        assert_eq!(PAYOUT_FACTOR, Decimal::ONE - BANK_FEE);
    }
}
