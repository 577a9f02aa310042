use crate::unions::Union1;

define_optional_union! {
    /// A union of a present element or its absence.
    Maybe<T>, MaybeFactory {
        Present, present, is_present;
        Absent, absent, is_absent;
    }
}

impl<T> From<Union1<T>> for Maybe<T> {
    fn from(union: Union1<T>) -> Self {
        union.into_join(Self::Present, || Self::Absent)
    }
}

impl<T> From<Maybe<T>> for Union1<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_join(Self::First, || Self::None)
    }
}
