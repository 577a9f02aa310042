define_union! {
    /// A union of two elements.
    Union2, Union2Factory {
        First(A), first, is_first, 1;
        Second(B), second, is_second, 2;
    }
}
