pub mod asks;
pub mod comments;
pub mod wallet;

pub use asks::AskService;
pub use comments::CommentService;
pub use wallet::WalletService;
