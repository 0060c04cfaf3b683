use crate::error::Result;
use crate::types::{validate_id_capacity, WordId};
use rustc_hash::FxHashMap;

/// Interning context for target words.
///
/// One vocabulary is created per search run and passed to whatever needs to
/// turn words into ids or back; there is no process-wide instance.
#[derive(Debug, Default)]
pub struct Vocabulary {
    str_to_id: FxHashMap<String, WordId>,
    id_to_str: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut vocabulary = Self::default();
        for token in tokens {
            vocabulary.intern(token)?;
        }
        Ok(vocabulary)
    }

    pub fn intern(&mut self, word: &str) -> Result<WordId> {
        if let Some(id) = self.str_to_id.get(word) {
            return Ok(*id);
        }

        let id = WordId(validate_id_capacity(self.id_to_str.len(), "target vocabulary")?);
        self.id_to_str.push(word.to_string());
        self.str_to_id.insert(word.to_string(), id);
        Ok(id)
    }

    pub fn intern_phrase(&mut self, phrase: &str) -> Result<Vec<WordId>> {
        phrase
            .split_whitespace()
            .map(|word| self.intern(word))
            .collect()
    }

    pub fn id_for(&self, word: &str) -> Option<WordId> {
        self.str_to_id.get(word).copied()
    }

    /// Panics if `id` did not come from this vocabulary.
    pub fn word(&self, id: WordId) -> &str {
        &self.id_to_str[id.index()]
    }

    pub fn ids_to_strings(&self, ids: &[WordId]) -> Vec<String> {
        ids.iter().map(|id| self.word(*id).to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_str.is_empty()
    }
}
