//! Compact trailing answer key: `<id><letters>` groups such as `1A2BC3D`

use crate::models::Question;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashSet};

static KEY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+[A-Z]+)+$").expect("Invalid answer key line regex"));

static KEY_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[0-9]+[A-Z]+)+$").expect("Invalid answer key tail regex"));

static KEY_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)([A-Z]+)").expect("Invalid answer key group regex"));

/// Decoded answer key: question id → correct letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    entries: BTreeMap<u32, BTreeSet<char>>,
}

impl AnswerKey {
    /// Decode a key string; groups whose id does not fit a u32 are skipped
    ///
    /// A repeated id keeps the letters of its last occurrence.
    pub fn decode(key: &str) -> Self {
        let key = key.trim().to_uppercase();
        let mut entries = BTreeMap::new();

        for cap in KEY_GROUP.captures_iter(&key) {
            let (Some(id), Some(letters)) = (cap.get(1), cap.get(2)) else {
                continue;
            };
            match id.as_str().parse::<u32>() {
                Ok(id) => {
                    entries.insert(id, letters.as_str().chars().collect());
                }
                Err(_) => log::debug!("Skipping answer key group with oversized id {}", id.as_str()),
            }
        }

        Self { entries }
    }

    pub fn get(&self, id: u32) -> Option<&BTreeSet<char>> {
        self.entries.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill in questions that have neither an explicit answer line nor inline marks
    ///
    /// Ids with no matching question are ignored.
    pub fn apply_to(&self, questions: &mut [Question]) {
        let known: HashSet<u32> = questions.iter().map(|q| q.id).collect();
        for id in self.ids().filter(|id| !known.contains(id)) {
            log::debug!("Answer key references unknown question {}", id);
        }

        for question in questions
            .iter_mut()
            .filter(|q| !q.explicit_answer && q.correct.is_empty())
        {
            if let Some(letters) = self.get(question.id) {
                question.correct = letters.clone();
                question.retain_known_correct();
            }
        }
    }
}

/// Scan lines from the end for the last one that is entirely a compact key
///
/// Returns the uppercased, trimmed key line.
pub fn find_last_key_line<'a, I>(lines: I) -> Option<String>
where
    I: DoubleEndedIterator<Item = &'a str>,
{
    lines
        .rev()
        .map(|line| line.trim().to_uppercase())
        .find(|line| KEY_LINE.is_match(line))
}

/// Match a compact key anchored to the very end of `text`
///
/// Case-sensitive: only uppercase letters take part in the key.
pub fn find_key_at_tail(text: &str) -> Option<String> {
    KEY_TAIL.find(text).map(|m| m.as_str().to_string())
}
