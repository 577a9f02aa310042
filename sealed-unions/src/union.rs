/// A closed variant type.
pub trait Union: Sized {
    /// A number of variants including an empty one.
    const VARIANTS: usize;

    type Factory: Factory<Union = Self>;

    /// Returns a 1-based index of the active variant.
    fn slot(&self) -> usize;

    fn factory() -> Self::Factory {
        Default::default()
    }
}

/// A stateless constructor of union values.
pub trait Factory: Clone + Copy + Default {
    type Union: Union<Factory = Self>;
}
