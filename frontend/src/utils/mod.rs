pub mod lifecycle;
pub mod storage;
