pub mod error;
pub mod model;
pub mod sample;
pub mod traits;

pub use error::OcrError;
pub use model::{model_output_dir, output_file, sanitize_model_name};
pub use sample::{list_samples, ImageSample};
pub use traits::{OcrRequest, VisionProvider};
