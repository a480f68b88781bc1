pub mod constants;
pub mod format;
pub mod storage;
pub mod url;
pub mod validation;
