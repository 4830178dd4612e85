//! Database repository layer (persistence gateway).
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the
//! connection pool or inside a `DatabaseTransaction`. Managers open a transaction with
//! `TransactionTrait::begin`, hand it to the repositories, and commit explicitly; a
//! transaction dropped before commit is rolled back.
//!
//! Reads that precede a conditional write take a row lock (`SELECT ... FOR UPDATE` where
//! the backend supports it) and every state change is itself a compare-and-swap
//! `UPDATE ... WHERE <expected state>`, so concurrent writers serialize on any backend.

pub mod catalog;
pub mod driver;
pub mod order;
pub mod payment;
pub mod shift;
