pub mod config;
pub mod logging;

pub mod fetch;
pub mod filename;
pub mod manifest;
pub mod merge;
pub mod quality;
pub mod storage;
pub mod textclean;
