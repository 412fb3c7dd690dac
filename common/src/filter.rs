/// A filter that keeps some parts of input, for example, some elements of an
/// array, and reports them by their indices in the input.
pub trait Filter<T: ?Sized> {
    /// The indices of the kept elements, in input order.
    fn filter_indices(&mut self, input: &T) -> Vec<usize>;

    /// Both the kept and the removed indices. Every index of the input appears
    /// in exactly one of the two lists, each in input order.
    fn filter_all_indices(&mut self, input: &T) -> (Vec<usize>, Vec<usize>);
}

/// A predicate over single elements keeps the elements it accepts.
impl<T, F: FnMut(&T) -> bool> Filter<[T]> for F {
    fn filter_indices(&mut self, input: &[T]) -> Vec<usize> {
        { input.iter().enumerate() }
            .filter_map(|(index, item)| (self)(item).then_some(index))
            .collect()
    }

    fn filter_all_indices(&mut self, input: &[T]) -> (Vec<usize>, Vec<usize>) {
        let mut kept = Vec::with_capacity(input.len());
        let mut removed = Vec::new();
        for (index, item) in input.iter().enumerate() {
            if (self)(item) {
                kept.push(index);
            } else {
                removed.push(index);
            }
        }
        (kept, removed)
    }
}
