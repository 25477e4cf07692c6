use std::fmt;

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// Singly linked list.
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks to the tail, so O(n).
    pub fn push_back(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
        self.len += 1;
    }

    /// Reverse in place by relinking nodes.
    pub fn reverse(&mut self) {
        let mut prev: Option<Box<Node<T>>> = None;
        let mut current = self.head.take();

        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }

        self.head = prev;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // 逐一釋放節點，避免長串列遞迴 drop 造成堆疊溢位
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "{} -> ", item)?;
        }
        write!(f, "none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_and_display() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(10);
        list.push_back(20);
        list.push_back(30);

        assert_eq!(list.len(), 4);
        assert_eq!(list.to_string(), "1 -> 10 -> 20 -> 30 -> none");
    }

    #[test]
    fn test_reverse() {
        let mut list: LinkedList<i32> = [1, 10, 20, 30].into_iter().collect();
        list.reverse();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10, 1]);
        assert_eq!(list.to_string(), "30 -> 20 -> 10 -> 1 -> none");
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_empty_list() {
        let mut list: LinkedList<String> = LinkedList::default();
        assert!(list.is_empty());
        list.reverse();
        assert_eq!(list.to_string(), "none");
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let list: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
