
use quickcheck::{Arbitrary, Gen};

// Small value domain so sequences repeat values and overlap each other.
const DOMAIN: u8 = 24;

// Arbitrary Sequence //
#[derive(Debug, Clone)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Arbitrary for Sequence {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(narrow(Vec::<u8>::arbitrary(g)))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

fn narrow(values: Vec<u8>) -> Vec<u8> {
    values.into_iter().map(|v| v % DOMAIN).collect()
}

// Arbitrary Pair of Overlapping Sequences //
#[derive(Debug, Clone)]
pub struct SequencePair(pub Sequence, pub Sequence);

impl Arbitrary for SequencePair {
    fn arbitrary(g: &mut Gen) -> Self {
        let shared = narrow(Vec::arbitrary(g));

        let mut left = narrow(Vec::arbitrary(g));
        let mut right = narrow(Vec::arbitrary(g));
        left.extend(&shared);
        right.extend(&shared);

        SequencePair(Sequence(left), Sequence(right))
    }
}

// Arbitrary Collection of Sequences //
#[derive(Debug, Clone)]
pub struct SequenceCollection {
    sequences: Vec<Sequence>,
}

impl SequenceCollection {
    pub fn as_slice(&self) -> &[Sequence] {
        self.sequences.as_slice()
    }
}

impl Arbitrary for SequenceCollection {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = u32::arbitrary(g) % 5 + 1;
        let mutual = narrow(Vec::arbitrary(g));

        let mut sequences = Vec::new();
        for _ in 0..count {
            let mut seq = narrow(Vec::arbitrary(g));
            seq.extend(&mutual);
            sequences.push(Sequence(seq));
        }

        Self { sequences }
    }
}

// Arbitrary Non-Empty Numbers //
#[derive(Debug, Clone)]
pub struct NonEmpty<T>(pub Vec<T>);

impl<T: Arbitrary> Arbitrary for NonEmpty<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut values = Vec::<T>::arbitrary(g);
        if values.is_empty() {
            values.push(T::arbitrary(g));
        }
        Self(values)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0.shrink()
                .filter(|values| !values.is_empty())
                .map(Self)
        )
    }
}
