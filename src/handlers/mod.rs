pub mod quiz_handler;
pub mod registration_handler;

pub use quiz_handler::{
    create_quiz, delete_quiz, get_completed_quizzes, get_quiz, get_quizzes, solve_quiz,
};
pub use registration_handler::register_user;
