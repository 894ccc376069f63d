mod dataset;
mod loader;

pub use dataset::QuizDataset;
pub use loader::load_questions_from_json;
