use std::fmt;

use crate::database::error::RepositoryError;
use crate::database::resource::ConstraintPolicy;
use crate::error::ApiError;

/// Repository operation a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::List => "listing",
            Operation::Get => "fetching",
            Operation::Create => "creating",
            Operation::Update => "updating",
            Operation::Delete => "deleting",
        };
        f.write_str(verb)
    }
}

/// Map a repository failure to the client outcome `policy` declares for it.
///
/// Foreign key violations mean a missing parent on writes and surviving
/// dependents on deletes. Anything the policy does not name is logged in
/// full and answered with a generic 500.
pub fn classify(entity: &str, policy: &ConstraintPolicy, op: Operation, err: RepositoryError) -> ApiError {
    let is_write = matches!(op, Operation::Create | Operation::Update);

    let mapped = match &err {
        RepositoryError::ForeignKeyViolation { .. } if is_write => {
            policy.missing_reference.map(ApiError::bad_request)
        }
        RepositoryError::ForeignKeyViolation { .. } if op == Operation::Delete => {
            policy.dependents_exist.map(ApiError::bad_request)
        }
        RepositoryError::UniqueViolation { .. } if is_write => policy.duplicate.map(ApiError::conflict),
        _ => None,
    };

    match mapped {
        Some(api_error) => {
            tracing::warn!("{} {} rejected: {}", op, entity, err);
            api_error
        }
        None => {
            tracing::error!("Error while {} {}: {:?}", op, entity, err);
            ApiError::internal_server_error(format!("Error while {} {}", op, subject(entity, op)))
        }
    }
}

// Listing names the collection; every catalog entity pluralizes with `s`
fn subject(entity: &str, op: Operation) -> String {
    let entity = entity.to_lowercase();
    match op {
        Operation::List => format!("{}s", entity),
        _ => entity,
    }
}
