pub mod ffd;
pub mod search;
