//! The single transition authority for the redesign-request lifecycle.
//!
//! The old client mutated the request `status` column from half a dozen pages
//! with no shared rules. Here every status write goes through [`transition`],
//! and the caller applies the returned status inside the same database
//! transaction as the action's side effects.

use thiserror::Error;

use crate::models::requests::Status;
use crate::models::users::Roles;

/// Everything that can move a request between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    /// A designer submits a quotation.
    SubmitQuotation,
    /// The customer accepts one quotation.
    AcceptQuotation,
    /// The assigned designer begins work.
    StartWork,
    /// The assigned designer finishes the redesign.
    CompleteWork,
    /// The customer (pre-acceptance) or an admin cancels the request.
    Cancel,
}

impl RequestAction {
    fn name(self) -> &'static str {
        match self {
            RequestAction::SubmitQuotation => "submit a quotation",
            RequestAction::AcceptQuotation => "accept a quotation",
            RequestAction::StartWork => "start work",
            RequestAction::CompleteWork => "complete work",
            RequestAction::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a {role} cannot {action} on a redesign request")]
    WrongActor { role: &'static str, action: &'static str },
    #[error("cannot {action} while the request is {current}")]
    InvalidState { current: &'static str, action: &'static str },
}

fn role_name(role: &Roles) -> &'static str {
    match role {
        Roles::Customer => "customer",
        Roles::Designer => "designer",
        Roles::DeliveryPartner => "delivery partner",
        Roles::Admin => "admin",
    }
}

fn status_name(status: Status) -> &'static str {
    match status {
        Status::Pending => "pending",
        Status::Quoted => "quoted",
        Status::Accepted => "accepted",
        Status::InProgress => "in_progress",
        Status::Completed => "completed",
        Status::Cancelled => "cancelled",
    }
}

/// Compute the next status for (current, actor role, action), or the reason
/// the action is rejected.
///
/// Callers are responsible for the identity checks this table cannot see
/// (the customer must own the request, the designer must be the assigned one).
pub fn transition(
    current: Status,
    actor: &Roles,
    action: RequestAction,
) -> Result<Status, TransitionError> {
    use RequestAction::*;

    let wrong_actor = || TransitionError::WrongActor {
        role: role_name(actor),
        action: action.name(),
    };
    let invalid_state = || TransitionError::InvalidState {
        current: status_name(current),
        action: action.name(),
    };

    match action {
        SubmitQuotation => {
            if *actor != Roles::Designer {
                return Err(wrong_actor());
            }
            match current {
                // Further quotations on an already-quoted request are fine.
                Status::Pending | Status::Quoted => Ok(Status::Quoted),
                _ => Err(invalid_state()),
            }
        }
        AcceptQuotation => {
            if *actor != Roles::Customer {
                return Err(wrong_actor());
            }
            match current {
                Status::Quoted => Ok(Status::Accepted),
                _ => Err(invalid_state()),
            }
        }
        StartWork => {
            if *actor != Roles::Designer {
                return Err(wrong_actor());
            }
            match current {
                Status::Accepted => Ok(Status::InProgress),
                _ => Err(invalid_state()),
            }
        }
        CompleteWork => {
            if *actor != Roles::Designer {
                return Err(wrong_actor());
            }
            match current {
                Status::InProgress => Ok(Status::Completed),
                _ => Err(invalid_state()),
            }
        }
        Cancel => {
            // Admins can cancel any live request; customers only before a
            // designer has been committed.
            match actor {
                Roles::Admin => {
                    if current.is_terminal() {
                        Err(invalid_state())
                    } else {
                        Ok(Status::Cancelled)
                    }
                }
                Roles::Customer => match current {
                    Status::Pending | Status::Quoted => Ok(Status::Cancelled),
                    _ => Err(invalid_state()),
                },
                _ => Err(wrong_actor()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotation_moves_pending_to_quoted() {
        assert_eq!(
            transition(Status::Pending, &Roles::Designer, RequestAction::SubmitQuotation),
            Ok(Status::Quoted)
        );
    }

    #[test]
    fn second_quotation_keeps_quoted() {
        assert_eq!(
            transition(Status::Quoted, &Roles::Designer, RequestAction::SubmitQuotation),
            Ok(Status::Quoted)
        );
    }

    #[test]
    fn only_designers_quote() {
        let err = transition(Status::Pending, &Roles::Customer, RequestAction::SubmitQuotation)
            .unwrap_err();
        assert!(matches!(err, TransitionError::WrongActor { .. }));
    }

    #[test]
    fn cannot_quote_accepted_request() {
        let err = transition(Status::Accepted, &Roles::Designer, RequestAction::SubmitQuotation)
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidState { .. }));
    }

    #[test]
    fn full_happy_path() {
        let mut status = Status::Pending;
        status = transition(status, &Roles::Designer, RequestAction::SubmitQuotation).unwrap();
        status = transition(status, &Roles::Customer, RequestAction::AcceptQuotation).unwrap();
        status = transition(status, &Roles::Designer, RequestAction::StartWork).unwrap();
        status = transition(status, &Roles::Designer, RequestAction::CompleteWork).unwrap();
        assert_eq!(status, Status::Completed);
        assert!(status.is_terminal());
    }

    #[test]
    fn accept_requires_a_quotation_first() {
        let err = transition(Status::Pending, &Roles::Customer, RequestAction::AcceptQuotation)
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidState { .. }));
    }

    #[test]
    fn customer_can_cancel_before_acceptance() {
        assert_eq!(
            transition(Status::Pending, &Roles::Customer, RequestAction::Cancel),
            Ok(Status::Cancelled)
        );
        assert_eq!(
            transition(Status::Quoted, &Roles::Customer, RequestAction::Cancel),
            Ok(Status::Cancelled)
        );
    }

    #[test]
    fn customer_cannot_cancel_after_acceptance() {
        let err =
            transition(Status::InProgress, &Roles::Customer, RequestAction::Cancel).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidState { .. }));
    }

    #[test]
    fn admin_can_cancel_any_live_state() {
        for current in [Status::Pending, Status::Quoted, Status::Accepted, Status::InProgress] {
            assert_eq!(
                transition(current, &Roles::Admin, RequestAction::Cancel),
                Ok(Status::Cancelled)
            );
        }
    }

    #[test]
    fn terminal_states_reject_everything() {
        let actions = [
            RequestAction::SubmitQuotation,
            RequestAction::AcceptQuotation,
            RequestAction::StartWork,
            RequestAction::CompleteWork,
            RequestAction::Cancel,
        ];
        let roles = [Roles::Customer, Roles::Designer, Roles::DeliveryPartner, Roles::Admin];

        for current in [Status::Completed, Status::Cancelled] {
            for role in &roles {
                for action in actions {
                    assert!(
                        transition(current, role, action).is_err(),
                        "{current:?} should reject {action:?} by {role:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn delivery_partner_cannot_touch_request_status() {
        for action in [
            RequestAction::SubmitQuotation,
            RequestAction::AcceptQuotation,
            RequestAction::StartWork,
            RequestAction::CompleteWork,
            RequestAction::Cancel,
        ] {
            assert!(transition(Status::Quoted, &Roles::DeliveryPartner, action).is_err());
        }
    }
}
