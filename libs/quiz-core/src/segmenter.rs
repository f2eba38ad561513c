//! Splits a token stream into one contiguous run per problem.

use crate::token::Token;
use crate::BOUNDARY_LEVEL;

/// One problem's share of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Index of the boundary heading in the full stream.
    pub split_point: usize,
    /// Tokens from the boundary up to the next boundary (or the end).
    pub tokens: &'a [Token],
}

/// Indices of the problem boundary headings, in document order.
pub fn find_split_points(tokens: &[Token]) -> Vec<usize> {
    let points: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_heading_open(BOUNDARY_LEVEL))
        .map(|(index, _)| index)
        .collect();
    tracing::debug!(split_points = ?points, "located problem boundaries");
    points
}

/// Partition the stream at every split point. Tokens before the first
/// boundary belong to no problem.
pub fn segment(tokens: &[Token]) -> Vec<Segment<'_>> {
    let points = find_split_points(tokens);
    points
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = points.get(i + 1).copied().unwrap_or(tokens.len());
            Segment {
                split_point: start,
                tokens: &tokens[start..end],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn split_points_match_level_three_headings() {
        let tokens = tokenize("# Quiz\n\n### One\n\ntext\n\n## Part\n\n### Two\n");
        let points = find_split_points(&tokens);
        assert_eq!(points.len(), 2);
        assert!(points.windows(2).all(|w| w[0] < w[1]));
        for &p in &points {
            assert!(tokens[p].is_heading_open(3));
        }
    }

    #[test]
    fn segments_cover_up_to_next_boundary() {
        let tokens = tokenize("intro\n\n### One\n\nfirst\n\n### Two\n\nsecond\n");
        let segments = segment(&tokens);
        assert_eq!(segments.len(), 2);

        // intro paragraph occupies tokens 0..3
        assert_eq!(segments[0].split_point, 3);
        assert_eq!(segments[0].tokens.len(), 6);
        assert_eq!(segments[1].split_point, 9);
        assert_eq!(segments[1].tokens.len(), tokens.len() - 9);
        assert_eq!(segments[1].tokens.last(), tokens.last());
    }

    #[test]
    fn no_boundaries_means_no_segments() {
        let tokens = tokenize("# Title\n\n## Section\n\nplain text\n");
        assert!(find_split_points(&tokens).is_empty());
        assert!(segment(&tokens).is_empty());
    }

    #[test]
    fn adjacent_boundaries_give_short_segments() {
        let tokens = tokenize("### A\n### B\n");
        let segments = segment(&tokens);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].tokens.len(), 3);
        assert_eq!(segments[1].split_point, 3);
    }
}
