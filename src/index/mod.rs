pub mod word_list;
pub mod guard;
