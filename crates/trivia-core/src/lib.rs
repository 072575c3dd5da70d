//! trivia-core: question model, pagination, and quiz selection.
//!
//! This crate defines the data model, the error taxonomy, the pure
//! paginate/select operations, and the `QuestionStore` seam that the
//! server and CLI build on.

pub mod categories;
pub mod error;
pub mod model;
pub mod paginate;
pub mod parser;
pub mod quiz;
pub mod search;
pub mod session;
pub mod store;
pub mod traits;

pub use error::TriviaError;
pub use model::{Category, CategoryFilter, CategoryId, NewQuestion, Question, QuestionId};
pub use paginate::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::{select_quiz_question, Selection};
pub use store::MemoryStore;
pub use traits::QuestionStore;
