mod answerer;
mod uploader;

pub use answerer::QuestionAnswerer;
pub use uploader::{UploadReceipt, Uploader};
