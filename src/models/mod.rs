mod answers;
mod question;

pub use answers::Answers;
pub use question::Question;
