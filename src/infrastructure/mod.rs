pub mod export;
pub mod logging;
pub mod storage;
