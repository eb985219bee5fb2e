mod document_test;
mod summary_test;
