//! Gateway Types
//!
//! Domain models, closed chain/token sets, fixed-point decoding, and the
//! error taxonomy shared by the gateway crates. No I/O lives here.

pub mod adapters;
pub mod chain;
pub mod pools;
pub mod quotes;
pub mod units;
pub mod wallet;

pub use adapters::{AdapterError, RpcError};
pub use chain::{Chain, ChainParseError, SymbolParseError, TokenSymbol};
pub use pools::{TrackedPool, TrackedPoolsResponse};
pub use quotes::{QuoteError, RouteStatus, SwapQuote};
pub use units::{format_units, UnitsError};
pub use wallet::{OpenPosition, TokenBalance, WalletError, WalletOverview};

// Re-export external dependencies used in our public types
pub use chrono;
pub use serde_json;
