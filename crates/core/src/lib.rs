pub mod cache;
pub mod film;
pub mod storage;
pub mod upstream;
