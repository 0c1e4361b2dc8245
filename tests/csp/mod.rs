pub mod strategy;

pub mod test_arc_consistency;
pub mod test_search;
