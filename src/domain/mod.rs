pub mod ask;
pub mod bump;
pub mod comment;
pub mod offer;
pub mod tag;
pub mod transaction;
pub mod user;

pub use ask::*;
pub use bump::*;
pub use comment::*;
pub use offer::*;
pub use tag::*;
pub use transaction::*;
pub use user::*;
