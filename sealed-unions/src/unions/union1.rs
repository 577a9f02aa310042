define_optional_union! {
    /// A union of an element or none at all.
    Union1<A>, Union1Factory {
        First, first, is_first;
        None, none, is_none;
    }
}
