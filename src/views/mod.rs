pub mod lookup;
pub mod overview;
pub mod search;
pub mod stats;
