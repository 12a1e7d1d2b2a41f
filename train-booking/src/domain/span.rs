//! Half-open spans along a route.
//!
//! A ticket occupies a seat from its boarding position up to, but not
//! including, its destination position. Two spans conflict only when they
//! share at least one station-to-station segment; touching at a station is
//! not a conflict.

use super::route::RoutePosition;

/// Does the booked span `[book_src, book_dest)` overlap the query span
/// `[query_src, query_dest)`?
///
/// # Examples
///
/// ```
/// use train_booking::domain::{RoutePosition, overlaps};
///
/// let p = RoutePosition;
///
/// // A→C against B→D share the B→C segment
/// assert!(overlaps(p(0), p(2), p(1), p(3)));
///
/// // A→C against C→D only touch at C
/// assert!(!overlaps(p(0), p(2), p(2), p(3)));
/// ```
pub fn overlaps(
    book_src: RoutePosition,
    book_dest: RoutePosition,
    query_src: RoutePosition,
    query_dest: RoutePosition,
) -> bool {
    book_src < query_dest && book_dest > query_src
}

/// A half-open `[start, end)` range of route positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: RoutePosition,
    end: RoutePosition,
}

impl Span {
    /// Create a span. No ordering is enforced between `start` and `end`.
    pub fn new(start: RoutePosition, end: RoutePosition) -> Self {
        Self { start, end }
    }

    /// Boarding position.
    pub fn start(&self) -> RoutePosition {
        self.start
    }

    /// Alighting position (exclusive).
    pub fn end(&self) -> RoutePosition {
        self.end
    }

    /// Does `self`, taken as a booking, overlap the `query` span?
    pub fn overlaps(&self, query: &Span) -> bool {
        overlaps(self.start, self.end, query.start, query.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span::new(RoutePosition(start), RoutePosition(end))
    }

    #[test]
    fn shared_segment_overlaps() {
        assert!(span(0, 2).overlaps(&span(1, 3)));
        assert!(span(1, 3).overlaps(&span(0, 2)));
    }

    #[test]
    fn containment_overlaps() {
        assert!(span(0, 4).overlaps(&span(1, 2)));
        assert!(span(1, 2).overlaps(&span(0, 4)));
    }

    #[test]
    fn identical_spans_overlap() {
        assert!(span(1, 3).overlaps(&span(1, 3)));
    }

    #[test]
    fn touching_at_destination_does_not_overlap() {
        // Ticket alights at C exactly where the query boards
        assert!(!span(0, 2).overlaps(&span(2, 3)));
    }

    #[test]
    fn touching_at_boarding_does_not_overlap() {
        // Ticket boards at C exactly where the query alights
        assert!(!span(2, 3).overlaps(&span(0, 2)));
    }

    #[test]
    fn disjoint_spans_do_not_overlap() {
        assert!(!span(0, 1).overlaps(&span(2, 3)));
        assert!(!span(2, 3).overlaps(&span(0, 1)));
    }

    #[test]
    fn reversed_query_matches_nothing_forward() {
        // Query "from D to A" never satisfies both inequalities for a forward booking
        assert!(!span(0, 1).overlaps(&span(3, 0)));
        assert!(!span(1, 3).overlaps(&span(3, 0)));
    }
}
