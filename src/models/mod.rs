//! Domain models for quizdeck.
//!
//! - [`QuestionRecord`]: a question and its answer, the only persisted entity.
//! - [`AddQuestionInput`] / [`AddQuestionResponse`]: the `/add_question` wire types.

mod question;

pub use question::*;
