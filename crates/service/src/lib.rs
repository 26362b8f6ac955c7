//! Gateway Service
//!
//! Orchestration layer: the quote resolver's fallback chain, the
//! tracked-pool lister, and the wallet overview assembler.

pub mod pools;
pub mod quote;
pub mod wallet;

pub use pools::{PoolService, POOLS_CHAIN, POOLS_RPC_SOURCE, POOLS_STATIC_SOURCE, TRACKED_POOL_IDS};
pub use quote::QuoteService;
pub use wallet::{WalletService, WALLET_SOURCE};
