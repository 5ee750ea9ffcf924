//! Flattens a document plus its evidence spans into a sequence of plain and
//! pairing-tagged segments. The UI layer turns these into interactive
//! highlights keyed by `pairing_id`.

use tracing::warn;

use crate::model::{EvidenceSpan, Segment};

/// Walk the text once, emitting plain segments for gaps and tagged segments
/// for each span. Spans are sorted by start offset; when two spans overlap,
/// the earlier-starting one wins and the later one is truncated or dropped
/// with a logged collision, never a failure.
pub fn render_segments(text: &str, spans: &[EvidenceSpan]) -> Vec<Segment> {
    let mut spans: Vec<EvidenceSpan> = spans
        .iter()
        .filter(|s| s.start_offset < s.end_offset && s.end_offset <= text.len())
        .copied()
        .collect();
    spans.sort_by_key(|s| (s.start_offset, s.end_offset, s.pairing_id));
    // multiple evidence strings for one pairing can anchor identically
    spans.dedup();

    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in spans {
        let mut start = span.start_offset;
        let end = span.end_offset;

        if start < cursor {
            if end <= cursor {
                warn!(
                    pairing_id = span.pairing_id,
                    start, end, "dropping fully-overlapped highlight span"
                );
                continue;
            }
            warn!(
                pairing_id = span.pairing_id,
                start, end, cursor, "truncating overlapping highlight span"
            );
            start = cursor;
        }

        if start > cursor {
            segments.push(Segment {
                text: text[cursor..start].to_string(),
                pairing_id: None,
            });
        }
        segments.push(Segment {
            text: text[start..end].to_string(),
            pairing_id: Some(span.pairing_id),
        });
        cursor = end;
    }

    if cursor < text.len() {
        segments.push(Segment {
            text: text[cursor..].to_string(),
            pairing_id: None,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchKind;

    fn span(pairing_id: usize, start: usize, end: usize) -> EvidenceSpan {
        EvidenceSpan {
            pairing_id,
            start_offset: start,
            end_offset: end,
            match_kind: MatchKind::Exact,
        }
    }

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_plain_and_tagged_interleave() {
        let text = "aaa bbb ccc ddd";
        let segments = render_segments(text, &[span(0, 4, 7), span(1, 12, 15)]);

        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], Segment { text: "aaa ".into(), pairing_id: None });
        assert_eq!(segments[1], Segment { text: "bbb".into(), pairing_id: Some(0) });
        assert_eq!(segments[2], Segment { text: " ccc ".into(), pairing_id: None });
        assert_eq!(segments[3], Segment { text: "ddd".into(), pairing_id: Some(1) });
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let text = "aaa bbb ccc";
        let segments = render_segments(text, &[span(1, 8, 11), span(0, 0, 3)]);
        assert_eq!(segments[0].pairing_id, Some(0));
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_overlap_earlier_wins_later_truncated() {
        let text = "0123456789";
        let segments = render_segments(text, &[span(0, 0, 6), span(1, 4, 9)]);

        assert_eq!(segments[0], Segment { text: "012345".into(), pairing_id: Some(0) });
        assert_eq!(segments[1], Segment { text: "678".into(), pairing_id: Some(1) });
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_contained_span_dropped() {
        let text = "0123456789";
        let segments = render_segments(text, &[span(0, 0, 8), span(1, 2, 5)]);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].pairing_id, Some(0));
        assert_eq!(segments[1].pairing_id, None);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_identical_spans_deduplicated() {
        let text = "abcdef";
        let segments = render_segments(text, &[span(2, 1, 4), span(2, 1, 4)]);
        let tagged: Vec<_> = segments.iter().filter(|s| s.pairing_id.is_some()).collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_no_spans_single_plain_segment() {
        let text = "nothing highlighted";
        let segments = render_segments(text, &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].pairing_id, None);
        assert_eq!(segments[0].text, text);
    }

    #[test]
    fn test_out_of_range_span_ignored() {
        let text = "short";
        let segments = render_segments(text, &[span(0, 2, 99), span(1, 3, 3)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_concatenation_always_reconstructs_text() {
        let text = "the quick brown fox jumps over the lazy dog";
        let spans = [span(0, 4, 9), span(1, 4, 15), span(2, 20, 25), span(3, 40, 43)];
        assert_eq!(joined(&render_segments(text, &spans)), text);
    }
}
