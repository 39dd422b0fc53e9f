/// Receives set-algebra results one value at a time, so callers choose
/// whether to collect, count or forward them.
pub trait Visitor<T> {
    fn visit(&mut self, value: T);
    fn clear(&mut self);
}

/// Counts result cardinality without storing anything.
#[derive(Debug, Default)]
pub struct Counter {
    count: usize,
}

impl<T> Visitor<T> for Counter {
    fn visit(&mut self, _value: T) {
        self.count += 1;
    }

    fn clear(&mut self) {
        self.count = 0;
    }
}

impl Counter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Collects results into a vector.
#[derive(Debug)]
pub struct VecWriter<T> {
    data: Vec<T>,
}

impl<T> VecWriter<T> {
    pub fn with_capacity(cardinality: usize) -> Self {
        Self {
            data: Vec::with_capacity(cardinality),
        }
    }
}

impl<T> AsRef<[T]> for VecWriter<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<VecWriter<T>> for Vec<T> {
    fn from(writer: VecWriter<T>) -> Self {
        writer.data
    }
}

impl<T> Default for VecWriter<T> {
    fn default() -> Self {
        Self { data: Vec::default() }
    }
}

impl<T> Visitor<T> for VecWriter<T> {
    fn visit(&mut self, value: T) {
        self.data.push(value);
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}
