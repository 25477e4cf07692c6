//! Sorting drills. Each function returns a new ascending `Vec` and leaves the
//! input untouched.

pub fn selection<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    let n = out.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if out[j] < out[min_idx] {
                min_idx = j;
            }
        }
        out.swap(i, min_idx);
    }

    out
}

/// First element as pivot; elements equal to the pivot go left.
pub fn quick<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let Some((pivot, rest)) = values.split_first() else {
        return Vec::new();
    };

    let (left, right): (Vec<T>, Vec<T>) = rest.iter().cloned().partition(|v| v <= pivot);

    let mut out = quick(&left);
    out.push(pivot.clone());
    out.extend(quick(&right));
    out
}

/// Stable top-down merge sort.
pub fn merge<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let (left, right) = values.split_at(values.len() / 2);
    merge_sorted(&merge(left), &merge(right))
}

/// Merge two ascending slices. Ties take from `left` first.
pub fn merge_sorted<T: PartialOrd + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            out.push(right[j].clone());
            j += 1;
        } else {
            out.push(left[i].clone());
            i += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    type Sorter = fn(&[f64]) -> Vec<f64>;

    const SORTERS: [(&str, Sorter); 3] = [
        ("selection", selection::<f64>),
        ("quick", quick::<f64>),
        ("merge", merge::<f64>),
    ];

    #[test]
    fn test_sorters_agree() {
        let input = [3.0, 7.0, 6.0, -10.0, 15.0, 23.5, 55.0, -13.0];
        let expected = vec![-13.0, -10.0, 3.0, 6.0, 7.0, 15.0, 23.5, 55.0];
        for (name, sort) in SORTERS {
            assert_eq!(sort(&input), expected, "{} sort", name);
        }
    }

    #[test]
    fn test_sorters_handle_duplicates_and_edges() {
        for (name, sort) in SORTERS {
            assert!(sort(&[]).is_empty(), "{} sort", name);
            assert_eq!(sort(&[1.0]), vec![1.0], "{} sort", name);
            assert_eq!(
                sort(&[10.0, 7.0, 8.0, 9.0, 1.0, 5.0, 7.0]),
                vec![1.0, 5.0, 7.0, 7.0, 8.0, 9.0, 10.0],
                "{} sort",
                name
            );
        }
    }

    #[test]
    fn test_merge_is_stable() {
        #[derive(Debug, Clone)]
        struct Tagged(i32, char);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let input = [Tagged(2, 'a'), Tagged(1, 'b'), Tagged(2, 'c'), Tagged(1, 'd')];
        let tags: String = merge(&input).iter().map(|t| t.1).collect();
        assert_eq!(tags, "bdac");
    }

    #[test]
    fn test_merge_sorted() {
        assert_eq!(merge_sorted(&[1, 4, 9], &[2, 3, 10, 11]), vec![1, 2, 3, 4, 9, 10, 11]);
        assert_eq!(merge_sorted(&[], &[5]), vec![5]);
    }
}
