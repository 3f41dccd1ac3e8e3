pub mod answer_evaluator;
pub mod quiz_access;
pub mod quiz_service;
pub mod registration_service;

pub use answer_evaluator::AnswerEvaluator;
pub use quiz_access::QuizAccessPolicy;
pub use quiz_service::QuizService;
pub use registration_service::RegistrationService;
