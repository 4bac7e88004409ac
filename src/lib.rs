pub mod adapters;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod marketplace;

pub use adapters::{AskFilter, MemoryLedger, NewAsk, PostgresStore};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::{AskpoolError, Result};
pub use ledger::{min_bump_for_ask, Balance, LedgerService, LedgerStore, OfferPool};
pub use marketplace::{AskService, CommentService, WalletService};
