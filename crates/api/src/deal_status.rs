//! Deal lifecycle transition rules.
//!
//! The pipeline moves strictly forward (`pre_contact` through `publishing`)
//! with two terminal states (`stopped`, `dropped`) reachable from the middle
//! of the pipeline. Terminal states have no outgoing transitions.

use entity::wholesale::Status;

/// Whether a status change is legal. Re-submitting the current status is
/// always accepted so retried requests stay idempotent.
pub fn can_transition(from: Status, to: Status) -> bool {
    if from == to {
        return true;
    }
    successors(from).contains(&to)
}

/// Allowed next statuses for `from`, excluding the no-op self transition.
pub fn successors(from: Status) -> &'static [Status] {
    use Status::*;
    match from {
        PreContact => &[Contacting, Dropped],
        Contacting => &[Negotiating, Dropped, Stopped],
        Negotiating => &[Agreed, Dropped, Stopped],
        Agreed => &[PreparingPublish, Stopped],
        PreparingPublish => &[Publishing, Stopped],
        Publishing => &[Stopped],
        Stopped | Dropped => &[],
    }
}

/// Display label for a status. Total over the closed enum.
pub fn label(status: Status) -> &'static str {
    use Status::*;
    match status {
        PreContact => "Pre-contact",
        Contacting => "Contacting",
        Negotiating => "Negotiating",
        Agreed => "Agreed",
        PreparingPublish => "Preparing to publish",
        Publishing => "Publishing",
        Stopped => "Stopped",
        Dropped => "Dropped",
    }
}

/// Wire value of a status, as stored in the database.
pub fn status_str(status: Status) -> &'static str {
    use Status::*;
    match status {
        PreContact => "pre_contact",
        Contacting => "contacting",
        Negotiating => "negotiating",
        Agreed => "agreed",
        PreparingPublish => "preparing_publish",
        Publishing => "publishing",
        Stopped => "stopped",
        Dropped => "dropped",
    }
}

pub const ALL_STATUSES: [Status; 8] = [
    Status::PreContact,
    Status::Contacting,
    Status::Negotiating,
    Status::Agreed,
    Status::PreparingPublish,
    Status::Publishing,
    Status::Stopped,
    Status::Dropped,
];

#[cfg(test)]
mod tests {
    use super::*;
    use Status::*;

    #[test]
    fn same_status_is_always_legal() {
        for status in ALL_STATUSES {
            assert!(can_transition(status, status), "{:?}", status);
        }
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for from in [Stopped, Dropped] {
            for to in ALL_STATUSES {
                if to != from {
                    assert!(!can_transition(from, to), "{:?} -> {:?}", from, to);
                }
            }
        }
    }

    #[test]
    fn forward_pipeline_moves_are_legal() {
        let legal = [
            (PreContact, Contacting),
            (Contacting, Negotiating),
            (Negotiating, Agreed),
            (Agreed, PreparingPublish),
            (PreparingPublish, Publishing),
            (Publishing, Stopped),
            (Negotiating, Stopped),
            (PreContact, Dropped),
        ];
        for (from, to) in legal {
            assert!(can_transition(from, to), "{:?} -> {:?}", from, to);
        }
    }

    #[test]
    fn skipping_stages_is_illegal() {
        assert!(!can_transition(PreContact, Publishing));
        assert!(!can_transition(Contacting, Agreed));
        assert!(!can_transition(Agreed, Publishing));
    }

    #[test]
    fn backward_moves_are_illegal() {
        assert!(!can_transition(Negotiating, Contacting));
        assert!(!can_transition(Publishing, PreContact));
    }

    #[test]
    fn late_pipeline_cannot_be_dropped() {
        // Past "agreed" a deal is stopped, never dropped.
        assert!(!can_transition(Agreed, Dropped));
        assert!(!can_transition(PreparingPublish, Dropped));
        assert!(!can_transition(Publishing, Dropped));
    }

    #[test]
    fn labels_are_stable_and_distinct() {
        let labels: Vec<&str> = ALL_STATUSES.iter().map(|s| label(*s)).collect();
        for status in ALL_STATUSES {
            assert_eq!(label(status), label(status));
            assert!(!label(status).is_empty());
        }
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }
}
