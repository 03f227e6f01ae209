pub mod dataset;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod table_state;
pub mod view;
