pub mod meta;
pub mod pages;
