/// Question and answer pair shown on a detail page.
#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Long-form copy for a gallery or service detail page. Every part is
/// optional so an entry can ship with only the sections it has.
#[derive(Debug, PartialEq, Default)]
pub struct DetailedContent {
    pub overview: Option<&'static str>,
    pub benefits: &'static [&'static str],
    pub procedure: Option<&'static str>,
    pub recovery: Option<&'static str>,
    pub faq: &'static [Faq],
}

impl DetailedContent {
    pub const EMPTY: DetailedContent = DetailedContent {
        overview: None,
        benefits: &[],
        procedure: None,
        recovery: None,
        faq: &[],
    };
}

/// Anything that can be looked up by a stable id in a content table.
pub trait Keyed {
    fn id(&self) -> &'static str;
}

pub fn find_by_id<T: Keyed>(table: &'static [T], id: &str) -> Option<&'static T> {
    table.iter().find(|entry| entry.id() == id)
}

pub fn index_of<T: Keyed>(table: &[T], id: &str) -> Option<usize> {
    table.iter().position(|entry| entry.id() == id)
}

/// Previous and next entries around `id`, in table order.
pub fn neighbors<T: Keyed>(table: &'static [T], id: &str) -> (Option<&'static T>, Option<&'static T>) {
    match index_of(table, id) {
        Some(index) => {
            let previous = index.checked_sub(1).and_then(|i| table.get(i));
            (previous, table.get(index + 1))
        }
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry(&'static str);

    impl Keyed for Entry {
        fn id(&self) -> &'static str {
            self.0
        }
    }

    static TABLE: [Entry; 3] = [Entry("a"), Entry("b"), Entry("c")];

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(find_by_id(&TABLE, "b"), Some(&TABLE[1]));
        assert_eq!(find_by_id(&TABLE, "B"), None);
        assert_eq!(find_by_id(&TABLE, "b "), None);
        assert_eq!(find_by_id(&TABLE, ""), None);
    }

    #[test]
    fn neighbors_stop_at_the_ends() {
        assert_eq!(neighbors(&TABLE, "a"), (None, Some(&TABLE[1])));
        assert_eq!(neighbors(&TABLE, "b"), (Some(&TABLE[0]), Some(&TABLE[2])));
        assert_eq!(neighbors(&TABLE, "c"), (Some(&TABLE[1]), None));
        assert_eq!(neighbors(&TABLE, "missing"), (None, None));
    }
}
