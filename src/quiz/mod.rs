pub mod definition;
pub mod generator;
pub mod random;
pub mod session;
pub mod settings;

pub use self::definition::{Answer, Question};
pub use self::session::{Grade, QuizSession};
pub use self::settings::{QuestionKind, QuestionKinds};
