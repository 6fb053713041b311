//! Question bank - the editable list of questions between parsing and rendering

use crate::models::Question;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("Question {0} not found")]
    NotFound(u32),

    #[error("Question prompt must not be empty")]
    EmptyPrompt,

    #[error("No question id left to assign")]
    IdExhausted,
}

/// Whole-record access to a list of questions
pub trait QuestionRepository {
    /// All questions in order
    fn list(&self) -> &[Question];

    /// Add a question with the next id; the incoming `id` is ignored
    fn append(&mut self, question: Question) -> Result<u32, BankError>;

    /// Replace the question with `id` as a whole; the stored record keeps `id`
    fn replace(&mut self, id: u32, question: Question) -> Result<(), BankError>;
}

/// In-memory question repository
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-parsed questions as-is
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// count + 1, or max + 1 when count + 1 is already taken, or the smallest free id
    /// when max + 1 overflows
    fn next_id(&self) -> Result<u32, BankError> {
        let candidate = u32::try_from(self.questions.len())
            .ok()
            .and_then(|count| count.checked_add(1));
        if let Some(id) = candidate.filter(|id| self.get(*id).is_none()) {
            return Ok(id);
        }

        let max = self.questions.iter().map(|q| q.id).max().unwrap_or(0);
        if let Some(id) = max.checked_add(1) {
            return Ok(id);
        }

        let taken: HashSet<u32> = self.questions.iter().map(|q| q.id).collect();
        (1..=u32::MAX)
            .find(|id| !taken.contains(id))
            .ok_or(BankError::IdExhausted)
    }
}

/// Uppercase letters, trim the prompt and keep `correct` within the option letters
fn normalize(mut question: Question) -> Result<Question, BankError> {
    question.text = question.text.trim().to_string();
    if question.text.is_empty() {
        return Err(BankError::EmptyPrompt);
    }

    for option in &mut question.options {
        option.letter = option.letter.to_ascii_uppercase();
    }
    question.correct = question
        .correct
        .iter()
        .map(|l| l.to_ascii_uppercase())
        .collect();
    question.retain_known_correct();

    Ok(question)
}

impl QuestionRepository for QuestionBank {
    fn list(&self) -> &[Question] {
        &self.questions
    }

    fn append(&mut self, question: Question) -> Result<u32, BankError> {
        let mut question = normalize(question)?;
        question.id = self.next_id()?;
        let id = question.id;
        self.questions.push(question);
        Ok(id)
    }

    fn replace(&mut self, id: u32, question: Question) -> Result<(), BankError> {
        let mut question = normalize(question)?;
        let slot = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(BankError::NotFound(id))?;
        question.id = id;
        *slot = question;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerOption;

    fn sample(id: u32) -> Question {
        Question::new(id, format!("Q{}", id))
            .with_option('A', "x")
            .with_option('B', "y")
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut bank = QuestionBank::new();
        assert_eq!(bank.append(sample(0)).unwrap(), 1);
        assert_eq!(bank.append(sample(0)).unwrap(), 2);
        assert_eq!(bank.list().iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_append_after_parsed_questions() {
        let mut bank = QuestionBank::from_questions(vec![sample(1), sample(2), sample(3)]);
        assert_eq!(bank.append(sample(0)).unwrap(), 4);
    }

    #[test]
    fn test_append_skips_taken_id() {
        let mut bank = QuestionBank::from_questions(vec![sample(2), sample(7)]);
        // count + 1 = 3 is free
        assert_eq!(bank.append(sample(0)).unwrap(), 3);
        // count + 1 = 4 is free
        assert_eq!(bank.append(sample(0)).unwrap(), 4);

        let mut bank = QuestionBank::from_questions(vec![sample(1), sample(2), sample(4)]);
        assert_eq!(bank.append(sample(0)).unwrap(), 5);
    }

    #[test]
    fn test_append_after_largest_id_takes_smallest_free() {
        let mut bank = QuestionBank::from_questions(vec![sample(3), sample(u32::MAX)]);
        assert_eq!(bank.append(sample(0)).unwrap(), 1);
        // count + 1 = 4 is free again
        assert_eq!(bank.append(sample(0)).unwrap(), 4);
        assert!(bank.list().iter().all(|q| q.id > 0));
    }

    #[test]
    fn test_append_rejects_empty_prompt() {
        let mut bank = QuestionBank::new();
        assert_eq!(
            bank.append(Question::new(0, "   ")),
            Err(BankError::EmptyPrompt)
        );
        assert!(bank.is_empty());
    }

    #[test]
    fn test_append_normalizes_letters() {
        let mut bank = QuestionBank::new();
        let mut question = Question::new(0, " Q ");
        question.options.push(AnswerOption {
            letter: 'a',
            text: "x".to_string(),
        });
        question.correct = ['a', 'z'].into_iter().collect();

        let id = bank.append(question).unwrap();
        let stored = bank.get(id).unwrap();
        assert_eq!(stored.text, "Q");
        assert_eq!(stored.options[0].letter, 'A');
        assert_eq!(stored.correct.iter().collect::<String>(), "A");
    }

    #[test]
    fn test_replace_whole_record() {
        let mut bank = QuestionBank::from_questions(vec![sample(1), sample(2)]);
        let edited = Question::new(99, "Edited")
            .with_option('C', "z")
            .with_correct(['C']);

        bank.replace(2, edited).unwrap();

        let stored = bank.get(2).unwrap();
        assert_eq!(stored.text, "Edited");
        assert_eq!(stored.options.len(), 1);
        assert!(stored.is_correct('C'));
        assert!(bank.get(99).is_none());
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_replace_unknown_id() {
        let mut bank = QuestionBank::from_questions(vec![sample(1)]);
        assert_eq!(bank.replace(5, sample(5)), Err(BankError::NotFound(5)));
    }
}
