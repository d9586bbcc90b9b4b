use crate::cells::Point;
use crate::utils::{fnv_hashset, FnvHashSet};

/// Wall cells that are candidates to be opened next.
///
/// Insertion order is kept and removal is by position, so replaying the same sequence of
/// random indices against the same grid picks the same cells. Membership is by coordinate;
/// a point is never held twice.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    ordered: Vec<Point>,
    members: FnvHashSet<Point>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            ordered: Vec::with_capacity(capacity),
            members: fnv_hashset(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Point) -> bool {
        self.members.contains(&coord)
    }

    /// Append `coord` unless it is already present. Returns true if it was added.
    pub fn push(&mut self, coord: Point) -> bool {
        if self.members.insert(coord) {
            self.ordered.push(coord);
            true
        } else {
            false
        }
    }

    /// Remove and return the point at `index`, shifting later points down one place.
    pub fn remove_at(&mut self, index: usize) -> Option<Point> {
        if index < self.ordered.len() {
            let coord = self.ordered.remove(index);
            self.members.remove(&coord);
            Some(coord)
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<Point> {
        self.ordered.iter()
    }
}

impl Extend<Point> for Frontier {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for coord in iter {
            self.push(coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn duplicates_are_ignored() {
        let mut f = Frontier::new();
        assert!(f.push(Point::new(1, 1)));
        assert!(f.push(Point::new(2, 1)));
        assert!(!f.push(Point::new(1, 1)));
        assert_eq!(f.len(), 2);
        assert!(f.contains(Point::new(2, 1)));
    }

    #[test]
    fn positional_removal_keeps_order() {
        let mut f = Frontier::new();
        f.extend(vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)]);

        assert_eq!(f.remove_at(1), Some(Point::new(1, 0)));
        assert!(!f.contains(Point::new(1, 0)));
        assert_eq!(f.iter().cloned().collect::<Vec<_>>(),
                   vec![Point::new(0, 0), Point::new(2, 0), Point::new(3, 0)]);
        assert_eq!(f.remove_at(3), None);

        // once removed a point may come back, at the end
        assert!(f.push(Point::new(1, 0)));
        assert_eq!(f.iter().last(), Some(&Point::new(1, 0)));
    }

    #[test]
    fn membership_tracks_contents() {
        fn p(pushes: Vec<(u8, u8)>, removals: Vec<u8>) -> bool {
            let mut f = Frontier::new();
            f.extend(pushes.iter().map(|&(x, y)| Point::new(x as u32, y as u32)));
            for r in removals {
                if !f.is_empty() {
                    let index = r as usize % f.len();
                    f.remove_at(index);
                }
            }
            let listed = f.iter().cloned().collect::<FnvHashSet<Point>>();
            listed.len() == f.len() && f.iter().all(|&c| f.contains(c)) && listed == f.members
        }
        quickcheck(p as fn(Vec<(u8, u8)>, Vec<u8>) -> bool);
    }
}
