//! Repository layer over the statement primitives

pub mod generate;
pub mod inventory;
pub mod search;
pub mod statements;

pub use inventory::InventoryRepo;
pub use search::SearchResult;
