pub mod formatted_quiz_question;
pub mod quiz_item;
pub use formatted_quiz_question::FormattedQuizQuestion;
pub use quiz_item::QuizItem;
