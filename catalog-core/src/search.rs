use crate::record::VideoRecord;

/// Returns the corpus indexes whose description contains `query`,
/// case-insensitively, in corpus order. An empty query matches every
/// record ("show all"), mirroring substring semantics.
pub fn matching_indexes(query: &str, corpus: &[VideoRecord]) -> Vec<usize> {
    let needle = query.to_lowercase();
    corpus
        .iter()
        .enumerate()
        .filter(|(_, record)| record.description.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}
