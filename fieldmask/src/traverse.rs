use tracing::trace;

use crate::{FieldMask, FieldMut, KeyResolution, MapInstance, MessageInstance};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Keep what the mask lists, clear the rest
    Filter,
    /// Clear what the mask lists, keep the rest
    Prune,
}

/// Walks the populated fields of `msg`, clearing or keeping each according to `mask`.
///
/// | lookup           | Filter           | Prune            |
/// |------------------|------------------|------------------|
/// | no match         | clear            | keep             |
/// | leaf             | keep             | clear            |
/// | subtree          | recurse          | recurse          |
///
/// Recursion only happens into messages, the message elements of lists, and map values. A subtree matched
/// against a scalar field leaves the field as it is.
pub(crate) fn apply<R: KeyResolution>(mask: &FieldMask<R>, msg: &mut dyn MessageInstance, mode: Mode) {
    if mask.is_empty() {
        return;
    }
    for field in msg.populated_fields() {
        match mask.resolve(&field) {
            None => {
                if mode == Mode::Filter {
                    trace!(message = %msg.name(), %field, "clearing unmasked field");
                    msg.clear_field(&field);
                }
            }
            Some(child) if child.is_leaf() => {
                if mode == Mode::Prune {
                    trace!(message = %msg.name(), %field, "clearing masked field");
                    msg.clear_field(&field);
                }
            }
            Some(child) => match msg.field_mut(&field) {
                Some(FieldMut::Message(sub)) => apply(child, sub, mode),
                Some(FieldMut::List(list)) => {
                    for i in 0..list.len() {
                        if let Some(element) = list.message_mut(i) {
                            apply(child, element, mode);
                        }
                    }
                }
                Some(FieldMut::Map(map)) => apply_map(child, map, mode),
                Some(FieldMut::Scalar) | None => {}
            },
        }
    }
}

fn apply_map<R: KeyResolution>(mask: &FieldMask<R>, map: &mut dyn MapInstance, mode: Mode) {
    map.retain_entries(&mut |key: &str, value: Option<&mut dyn MessageInstance>| {
        let keep = match mask.resolve(key) {
            None => mode == Mode::Prune,
            Some(child) if child.is_leaf() => mode == Mode::Filter,
            Some(child) => match value {
                Some(msg) => {
                    apply(child, msg, mode);
                    true
                }
                // Scalar values have nothing to descend into, so a deeper path still counts as a match.
                None => mode == Mode::Filter,
            },
        };
        if !keep {
            trace!(%key, "removing map entry");
        }
        keep
    });
}
