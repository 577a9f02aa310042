define_union! {
    /// A union of three elements.
    Union3, Union3Factory {
        First(A), first, is_first, 1;
        Second(B), second, is_second, 2;
        Third(C), third, is_third, 3;
    }
}
