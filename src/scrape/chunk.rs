//! Fixed-size text chunking on character boundaries.

/// Splits `text` into consecutive chunks of at most `size` characters.
///
/// Chunk boundaries ignore word boundaries; a name spanning two chunks is
/// split. A `size` of zero yields the whole text as one chunk.
pub fn chunk_text(text: &str, size: usize) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = if size == 0 {
            rest.len()
        } else {
            rest.char_indices()
                .nth(size)
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len())
        };
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_have_fixed_size() {
        let chunks: Vec<&str> = chunk_text("abcdefghij", 4).collect();
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_chunks_respect_char_boundaries() {
        let text = "Zürich München";
        let chunks: Vec<&str> = chunk_text(text, 2).collect();
        assert_eq!(chunks.concat(), text);
        assert!(chunks.iter().all(|c| c.chars().count() <= 2));
        assert_eq!(chunks[0], "Zü");
    }

    #[test]
    fn test_split_name_across_chunks() {
        let chunks: Vec<&str> = chunk_text("New York", 5).collect();
        assert_eq!(chunks, vec!["New Y", "ork"]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert_eq!(chunk_text("", 10).count(), 0);
    }

    #[test]
    fn test_text_shorter_than_chunk() {
        let chunks: Vec<&str> = chunk_text("Berlin", 10_000).collect();
        assert_eq!(chunks, vec!["Berlin"]);
    }
}
