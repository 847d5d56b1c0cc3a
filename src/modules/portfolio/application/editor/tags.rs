use crate::portfolio::application::editor::experiences::EditorError;

/// Appends the values found in `input`.
///
/// Commas separate values, surrounding whitespace is trimmed and blank pieces
/// are dropped. Duplicates are kept, in input order.
pub fn add_tags(tags: &[String], input: &str) -> Vec<String> {
    let mut next = tags.to_vec();
    next.extend(
        input
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string),
    );
    next
}

pub fn remove_tag(tags: &[String], index: usize) -> Result<Vec<String>, EditorError> {
    if index >= tags.len() {
        return Err(EditorError::IndexOutOfRange {
            list: "tag",
            index,
            len: tags.len(),
        });
    }

    let mut next = tags.to_vec();
    next.remove(index);
    Ok(next)
}
