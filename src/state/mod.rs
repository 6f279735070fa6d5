/// State management module
///
/// This module handles all board state, including:
/// - Shared data structures (data.rs)
/// - Image handle bookkeeping (handles.rs)
/// - File intake and validation (intake.rs)
/// - The entry collection and its mutations (store.rs)
/// - Filtered views over the collection (filter.rs)

pub mod data;
pub mod filter;
pub mod handles;
pub mod intake;
pub mod store;
