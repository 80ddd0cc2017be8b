/// Per-search accumulator threaded by `&mut` through the whole call tree.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    nodes: u64,
    cutoffs: u64,
}

impl NodeCounter {
    pub fn new() -> Self { Self::default() }

    /// One successor generated.
    #[inline]
    pub fn visit(&mut self) { self.nodes += 1; }

    /// Alpha-beta bound crossed; later siblings are skipped.
    #[inline]
    pub fn cutoff(&mut self) { self.cutoffs += 1; }

    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn cutoffs(&self) -> u64 { self.cutoffs }
}
