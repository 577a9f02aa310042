define_union! {
    /// A union of five elements.
    Union5, Union5Factory {
        First(A), first, is_first, 1;
        Second(B), second, is_second, 2;
        Third(C), third, is_third, 3;
        Fourth(D), fourth, is_fourth, 4;
        Fifth(E), fifth, is_fifth, 5;
    }
}
