use rand::Rng;

use crate::error::SamplerError;

/// Number of questions drawn for one quiz attempt.
pub const DEFAULT_QUIZ_SIZE: usize = 5;

/// Draws the question set for a quiz attempt.
///
/// Sampling is uniform without replacement: every ordered selection of
/// `min(quiz_size, bank.len())` distinct entries is equally likely. The random source is
/// passed in so tests can seed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSampler {
    quiz_size: usize,
}

impl Default for QuizSampler {
    fn default() -> Self {
        Self::new(DEFAULT_QUIZ_SIZE)
    }
}

impl QuizSampler {
    /// A size of zero is raised to one.
    #[must_use]
    pub fn new(quiz_size: usize) -> Self {
        Self {
            quiz_size: quiz_size.max(1),
        }
    }

    #[must_use]
    pub fn quiz_size(&self) -> usize {
        self.quiz_size
    }

    /// Picks up to `quiz_size` distinct entries of `bank`, in presentation order.
    ///
    /// Keeps a working list of indices; each step takes a uniformly random position in the
    /// remaining list and removes it. The bank itself is never touched.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::EmptyBank` if `bank` is empty.
    pub fn sample<'a, T, R>(&self, bank: &'a [T], rng: &mut R) -> Result<Vec<&'a T>, SamplerError>
    where
        R: Rng + ?Sized,
    {
        if bank.is_empty() {
            return Err(SamplerError::EmptyBank);
        }

        let target = self.quiz_size.min(bank.len());
        let mut remaining: Vec<usize> = (0..bank.len()).collect();
        let mut picked = Vec::with_capacity(target);

        while picked.len() < target {
            let position = rng.random_range(0..remaining.len());
            let index = remaining.remove(position);
            picked.push(&bank[index]);
        }

        Ok(picked)
    }
}
