//! Classic data-structure and algorithm drills.

pub mod anagram;
pub mod linked_list;
pub mod search;
pub mod shapes;
pub mod sort;
