pub mod deal_status;
pub mod merge;
pub mod normalize;
pub mod options_cache;
pub mod schema;
pub mod sort_key;
