define_union! {
    /// A union of a single, always present element.
    Union0, Union0Factory {
        First(A), first, is_first, 1;
    }
}

impl<A> Union0<A> {
    pub fn into_inner(self) -> A {
        self.into_join(|value| value)
    }
}
