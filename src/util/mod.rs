pub mod score;
pub mod static_files;
