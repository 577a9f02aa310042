use crate::unions::Union2;

define_union! {
    /// A union of a left or right element.
    Either, EitherFactory {
        Left(L), left, is_left, 1;
        Right(R), right, is_right, 2;
    }
}

impl<L, R> From<Union2<L, R>> for Either<L, R> {
    fn from(union: Union2<L, R>) -> Self {
        union.into_join(Self::Left, Self::Right)
    }
}

impl<L, R> From<Either<L, R>> for Union2<L, R> {
    fn from(either: Either<L, R>) -> Self {
        either.into_join(Self::First, Self::Second)
    }
}
