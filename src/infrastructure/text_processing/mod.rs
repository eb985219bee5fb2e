mod composite_file_loader;
mod pdf_adapter;
mod tesseract_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use tesseract_adapter::TesseractAdapter;
