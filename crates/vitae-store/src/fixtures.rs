//! Deterministic corpus generation for tests and demos.
//!
//! Builds sample CV documents from a fixed role/skill vocabulary with a
//! seeded RNG, so repeated builds with the same seed produce an identical
//! corpus.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use vitae_core::Document;

const ROLES: &[&str] = &[
    "backend engineer",
    "frontend engineer",
    "data scientist",
    "devops engineer",
    "qa engineer",
    "product manager",
];

const SKILLS: &[&str] = &[
    "python", "java", "rust", "golang", "sql", "react", "docker", "kubernetes", "terraform",
    "pandas", "spark", "selenium", "typescript", "postgres", "redis",
];

const FILLER: &[&str] = &[
    "experienced",
    "developer",
    "with",
    "years",
    "of",
    "building",
    "scalable",
    "systems",
    "and",
    "teams",
];

/// Builder for a deterministic sample corpus.
#[derive(Debug)]
pub struct CorpusBuilder {
    seed: u64,
    document_count: usize,
    skills_per_document: usize,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self {
            seed: 42,
            document_count: 10,
            skills_per_document: 4,
        }
    }
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many documents to generate.
    pub fn with_documents(mut self, count: usize) -> Self {
        self.document_count = count;
        self
    }

    /// Set how many distinct skills each document mentions.
    pub fn with_skills_per_document(mut self, count: usize) -> Self {
        self.skills_per_document = count.min(SKILLS.len());
        self
    }

    /// Generate the corpus. Text is already normalized.
    pub fn build(&self) -> Vec<Document> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..self.document_count)
            .map(|i| {
                let role = ROLES[i % ROLES.len()];
                let skills: Vec<&str> = SKILLS
                    .choose_multiple(&mut rng, self.skills_per_document)
                    .copied()
                    .collect();

                let mut words: Vec<&str> = Vec::new();
                for skill in &skills {
                    let filler_run = rng.gen_range(1..=3);
                    words.extend(FILLER.choose_multiple(&mut rng, filler_run).copied());
                    words.push(skill);
                }

                Document::new(role, words.join(" "))
                    .with_path(format!("data/cv/{}/candidate_{}.pdf", role, i))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_corpus() {
        let a = CorpusBuilder::new().with_seed(7).build();
        let b = CorpusBuilder::new().with_seed(7).build();
        let texts_a: Vec<&str> = a.iter().map(|d| d.text.as_str()).collect();
        let texts_b: Vec<&str> = b.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts_a, texts_b);
    }

    #[test]
    fn test_document_count_respected() {
        let corpus = CorpusBuilder::new().with_documents(25).build();
        assert_eq!(corpus.len(), 25);
    }

    #[test]
    fn test_generated_text_is_normalized() {
        for doc in CorpusBuilder::new().build() {
            assert_eq!(doc.text, vitae_core::normalize_text(&doc.text));
        }
    }

    #[test]
    fn test_documents_carry_role_and_path() {
        let corpus = CorpusBuilder::new().with_documents(3).build();
        for doc in &corpus {
            assert!(!doc.role.is_empty());
            assert!(doc.path.as_deref().unwrap().contains(&doc.role));
        }
    }
}
