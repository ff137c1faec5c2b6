/// Injectable randomness for the recommendation tie-break.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}
