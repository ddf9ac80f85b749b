pub mod listings;

pub use listings::{Listing, OrderFilter};
