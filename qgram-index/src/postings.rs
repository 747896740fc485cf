use std::cmp::Ordering;

/// One entry of an inverted list: how often a q-gram occurs for an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Posting {
    pub entity_id: usize,
    pub frequency: usize,
}

impl Posting {
    pub fn new(entity_id: usize, frequency: usize) -> Self {
        Self {
            entity_id,
            frequency,
        }
    }
}

/// Adds one occurrence of `entity_id`. Lists are filled in ascending id order,
/// so only the last posting can belong to the same entity.
pub(crate) fn push_occurrence(list: &mut Vec<Posting>, entity_id: usize) {
    match list.last_mut() {
        Some(last) if last.entity_id == entity_id => last.frequency += 1,
        _ => list.push(Posting::new(entity_id, 1)),
    }
}

/// Union of several sorted inverted lists, summing the frequencies of shared ids.
pub fn merge_lists<'a, I>(lists: I) -> Vec<Posting>
where
    I: IntoIterator<Item = &'a [Posting]>,
{
    lists
        .into_iter()
        .fold(Vec::new(), |union, list| merge_two(&union, list))
}

fn merge_two(left: &[Posting], right: &[Posting]) -> Vec<Posting> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].entity_id.cmp(&right[j].entity_id) {
            Ordering::Equal => {
                result.push(Posting::new(
                    left[i].entity_id,
                    left[i].frequency + right[j].frequency,
                ));
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                result.push(left[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(right[j]);
                j += 1;
            }
        }
    }
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}
