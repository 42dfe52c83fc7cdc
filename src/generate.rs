//! Random sequence pairs for tests and benchmarks.
use crate::{Sequence, ALPHABET};
use itertools::Itertools;
use rand::Rng;

enum Mutation {
    // Replace char at pos.
    Substitution(usize, u8),
    // Insert char before pos.
    Insertion(usize, u8),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPHABET[rng.gen_range(0..ALPHABET.len())]
}

fn random_mutation(len_b: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For length 0 sequences, only generate insertions.
    match if len_b == 0 {
        1
    } else {
        rng.gen_range(0..3usize)
    } {
        0 => Mutation::Substitution(rng.gen_range(0..len_b), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len_b + 1), rand_char(rng)),
        _ => Mutation::Deletion(rng.gen_range(0..len_b)),
    }
}

/// A uniformly random `ACGT` sequence.
pub fn random_sequence(length: usize, rng: &mut impl Rng) -> Sequence {
    (0..length).map(|_| rand_char(rng)).collect_vec()
}

/// Applies `ceil(error_rate * len)` random single-symbol edits to `a`.
pub fn random_mutate(a: &[u8], error_rate: f32, rng: &mut impl Rng) -> Sequence {
    let num_mutations = (error_rate * a.len() as f32).ceil() as usize;
    let mut b = a.to_vec();
    for _ in 0..num_mutations {
        match random_mutation(b.len(), rng) {
            Mutation::Substitution(i, c) => b[i] = c,
            Mutation::Insertion(i, c) => b.insert(i, c),
            Mutation::Deletion(i) => {
                b.remove(i);
            }
        }
    }
    b
}

/// A random sequence of the given length, and a mutated copy of it.
pub fn generate_pair(length: usize, error_rate: f32, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let a = random_sequence(length, rng);
    let b = random_mutate(&a, error_rate, rng);
    (a, b)
}
