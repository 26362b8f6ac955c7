pub mod common;
pub mod pools;
pub mod quotes;
pub mod wallet;

pub use pools::get_pools;
pub use quotes::get_quote;
pub use wallet::get_wallet_overview;
