pub mod add_to_comparison;
pub mod clear_comparison;
pub mod get_comparison;
pub mod remove_from_comparison;
