pub mod draft;
pub mod export;
