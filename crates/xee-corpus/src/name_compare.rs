//! Natural ordering of entry names

use std::cmp::Ordering;

/// Compare entry names so that numeric runs sort by value.
///
/// `wiki-2.xml` sorts before `wiki-10.xml`. Numbers of any length are
/// compared without overflow; when all chunks are equal the name with
/// fewer chunks sorts first.
pub fn name_compare(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ordering = match (is_number(l), is_number(r)) {
            (true, true) => compare_numbers(l, r),
            _ => l.cmp(r),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.len().cmp(&right.len())
}

fn chunks(name: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut prev_digit = None;

    for (idx, c) in name.char_indices() {
        let digit = c.is_ascii_digit();
        if let Some(prev) = prev_digit {
            if prev != digit {
                result.push(&name[start..idx]);
                start = idx;
            }
        }
        prev_digit = Some(digit);
    }

    if start < name.len() {
        result.push(&name[start..]);
    }

    result
}

fn is_number(chunk: &str) -> bool {
    chunk.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sort_by_value() {
        assert_eq!(name_compare("2.xml", "10.xml"), Ordering::Less);
        assert_eq!(name_compare("wiki-10.xml", "wiki-9.xml"), Ordering::Greater);
        assert_eq!(name_compare("007.xml", "7.xml"), Ordering::Equal);
    }

    #[test]
    fn text_sorts_lexically() {
        assert_eq!(name_compare("a/1.xml", "b/1.xml"), Ordering::Less);
        assert_eq!(name_compare("abc", "abd"), Ordering::Less);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        assert_eq!(
            name_compare("123456789012345678901234567890", "99"),
            Ordering::Greater
        );
    }

    #[test]
    fn sorting_a_list() {
        let mut names = vec!["s10.xml", "s1.xml", "s2.xml"];
        names.sort_by(|a, b| name_compare(a, b));
        assert_eq!(names, vec!["s1.xml", "s2.xml", "s10.xml"]);
    }
}
