pub mod debounce;
pub mod navigation;
pub mod storage;
