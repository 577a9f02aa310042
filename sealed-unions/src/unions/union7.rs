define_union! {
    /// A union of seven elements.
    Union7, Union7Factory {
        First(A), first, is_first, 1;
        Second(B), second, is_second, 2;
        Third(C), third, is_third, 3;
        Fourth(D), fourth, is_fourth, 4;
        Fifth(E), fifth, is_fifth, 5;
        Sixth(F), sixth, is_sixth, 6;
        Seventh(G), seventh, is_seventh, 7;
    }
}
