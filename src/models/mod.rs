pub mod loaders;
pub mod summary;

pub use loaders::{load_pdf, load_text};
pub use summary::{
    AnalyzeRequest, AnalyzeResponse, ExtractMethod, ExtractRequest, ExtractResponse,
    UploadRequest, UploadResponse,
};
