//! Upload domain module

mod uploaded_file;

pub use uploaded_file::{FileKind, UploadedFile};
