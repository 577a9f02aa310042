use crate::unions::Union2;

define_union! {
    /// A union of a successful value or an error.
    Try, TryFactory {
        Success(T), success, is_success, 1;
        Failure(E), failure, is_failure, 2;
    }
}

impl<T, E> Try<T, E> {
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    fn from(try_: Try<T, E>) -> Self {
        try_.into_join(Ok, Err)
    }
}

impl<T, E> From<Union2<T, E>> for Try<T, E> {
    fn from(union: Union2<T, E>) -> Self {
        union.into_join(Self::Success, Self::Failure)
    }
}

impl<T, E> From<Try<T, E>> for Union2<T, E> {
    fn from(try_: Try<T, E>) -> Self {
        try_.into_join(Self::First, Self::Second)
    }
}
