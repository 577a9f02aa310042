define_union! {
    /// A union of nine elements.
    Union9, Union9Factory {
        First(A), first, is_first, 1;
        Second(B), second, is_second, 2;
        Third(C), third, is_third, 3;
        Fourth(D), fourth, is_fourth, 4;
        Fifth(E), fifth, is_fifth, 5;
        Sixth(F), sixth, is_sixth, 6;
        Seventh(G), seventh, is_seventh, 7;
        Eighth(H), eighth, is_eighth, 8;
        Ninth(I), ninth, is_ninth, 9;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Union;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    type IntegerUnion = Union9<usize, usize, usize, usize, usize, usize, usize, usize, usize>;

    const FACTORY: <IntegerUnion as Union>::Factory = Union9Factory::new();

    fn unions() -> [IntegerUnion; 9] {
        [
            FACTORY.first(1000),
            FACTORY.second(2000),
            FACTORY.third(3000),
            FACTORY.fourth(4000),
            FACTORY.fifth(5000),
            FACTORY.sixth(6000),
            FACTORY.seventh(7000),
            FACTORY.eighth(8000),
            FACTORY.ninth(9000),
        ]
    }

    #[test]
    fn join_each_slot() {
        assert_eq!(
            unions()
                .iter()
                .map(|union| {
                    union.join(
                        |&value| (1, value),
                        |&value| (2, value),
                        |&value| (3, value),
                        |&value| (4, value),
                        |&value| (5, value),
                        |&value| (6, value),
                        |&value| (7, value),
                        |&value| (8, value),
                        |&value| (9, value),
                    )
                })
                .collect::<Vec<_>>(),
            (1..=9).map(|slot| (slot, slot * 1000)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn continue_each_slot() {
        for union in unions() {
            let calls = RefCell::new(vec![]);

            union.continued(
                |&value| calls.borrow_mut().push((1, value)),
                |&value| calls.borrow_mut().push((2, value)),
                |&value| calls.borrow_mut().push((3, value)),
                |&value| calls.borrow_mut().push((4, value)),
                |&value| calls.borrow_mut().push((5, value)),
                |&value| calls.borrow_mut().push((6, value)),
                |&value| calls.borrow_mut().push((7, value)),
                |&value| calls.borrow_mut().push((8, value)),
                |&value| calls.borrow_mut().push((9, value)),
            );

            assert_eq!(calls.into_inner(), [(union.slot(), union.slot() * 1000)]);
        }
    }

    #[test]
    fn get_slots() {
        assert_eq!(
            unions().iter().map(Union::slot).collect::<Vec<_>>(),
            (1..=9).collect::<Vec<_>>()
        );
    }

    #[test]
    fn join_into_payload() {
        let union = Union9Factory::<u8, u16, u32, u64, i8, i16, i32, i64, String>::new()
            .ninth("foo".to_string());

        assert_eq!(
            union.into_join(
                |value| value.to_string(),
                |value| value.to_string(),
                |value| value.to_string(),
                |value| value.to_string(),
                |value| value.to_string(),
                |value| value.to_string(),
                |value| value.to_string(),
                |value| value.to_string(),
                |value| value,
            ),
            "foo"
        );
    }
}
