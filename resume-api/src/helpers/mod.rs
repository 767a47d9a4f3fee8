pub mod export;
pub mod text_extraction;
