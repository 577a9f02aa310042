//! Named factories for every union shape.

use crate::{generic::*, unions::*};

pub const fn nullet_factory<A>() -> Union0Factory<A> {
    Union0Factory::new()
}

pub const fn singlet_factory<A>() -> Union1Factory<A> {
    Union1Factory::new()
}

pub const fn doublet_factory<A, B>() -> Union2Factory<A, B> {
    Union2Factory::new()
}

pub const fn triplet_factory<A, B, C>() -> Union3Factory<A, B, C> {
    Union3Factory::new()
}

pub const fn quartet_factory<A, B, C, D>() -> Union4Factory<A, B, C, D> {
    Union4Factory::new()
}

pub const fn quintet_factory<A, B, C, D, E>() -> Union5Factory<A, B, C, D, E> {
    Union5Factory::new()
}

pub const fn sextet_factory<A, B, C, D, E, F>() -> Union6Factory<A, B, C, D, E, F> {
    Union6Factory::new()
}

pub const fn septet_factory<A, B, C, D, E, F, G>() -> Union7Factory<A, B, C, D, E, F, G> {
    Union7Factory::new()
}

pub const fn octet_factory<A, B, C, D, E, F, G, H>() -> Union8Factory<A, B, C, D, E, F, G, H> {
    Union8Factory::new()
}

pub const fn nonet_factory<A, B, C, D, E, F, G, H, I>() -> Union9Factory<A, B, C, D, E, F, G, H, I>
{
    Union9Factory::new()
}

pub const fn either_factory<L, R>() -> EitherFactory<L, R> {
    EitherFactory::new()
}

pub const fn maybe_factory<T>() -> MaybeFactory<T> {
    MaybeFactory::new()
}

pub const fn try_factory<T, E>() -> TryFactory<T, E> {
    TryFactory::new()
}
