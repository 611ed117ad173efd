pub mod file_loader;

pub use file_loader::{load_pdf, load_text};
