define_union! {
    /// A union of four elements.
    Union4, Union4Factory {
        First(A), first, is_first, 1;
        Second(B), second, is_second, 2;
        Third(C), third, is_third, 3;
        Fourth(D), fourth, is_fourth, 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Union;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    type IntegerUnion = Union4<usize, usize, usize, usize>;

    const FACTORY: <IntegerUnion as Union>::Factory = Union4Factory::new();

    fn unions() -> [IntegerUnion; 4] {
        [
            FACTORY.first(1000),
            FACTORY.second(2000),
            FACTORY.third(3000),
            FACTORY.fourth(4000),
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
                    )
                })
                .collect::<Vec<_>>(),
            (1..=4).map(|slot| (slot, slot * 1000)).collect::<Vec<_>>()
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
            );

            assert_eq!(calls.into_inner(), [(union.slot(), union.slot() * 1000)]);
        }
    }

    #[test]
    fn get_slots() {
        assert_eq!(
            unions().iter().map(Union::slot).collect::<Vec<_>>(),
            (1..=4).collect::<Vec<_>>()
        );
    }

    #[test]
    fn display() {
        let factory = Union4Factory::<usize, &str, char, bool>::new();

        assert_eq!(
            [
                factory.first(1).to_string(),
                factory.second("foo").to_string(),
                factory.third('x').to_string(),
                factory.fourth(false).to_string(),
            ],
            ["1", "foo", "x", "false"]
        );
    }
}
