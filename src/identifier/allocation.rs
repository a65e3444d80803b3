//! Collision resolution around the identifier generator.
//!
//! The generator's serial scan and the later insert are not atomic, so a
//! generated identifier can already be taken. On collision the serial of the
//! *original* identifier is bumped by an increasing counter; the store is not
//! rescanned. The store's uniqueness check on insert remains the final guard.

use tracing::{debug, warn};

use crate::error::{HrmsError, HrmsResult};
use crate::models::{EmployeeId, IdentityCandidate};
use crate::store::EmployeeStore;

use super::EmployeeIdGenerator;

/// Consecutive collisions tolerated before allocation gives up.
pub const MAX_ID_COLLISIONS: u32 = 9999;

/// Generates an identifier for the candidate and resolves collisions.
///
/// # Errors
///
/// Returns [`HrmsError::EmployeeIdExhausted`] after [`MAX_ID_COLLISIONS`]
/// consecutive collisions.
pub fn allocate_employee_id<S>(
    generator: &EmployeeIdGenerator,
    store: &S,
    candidate: &IdentityCandidate,
) -> HrmsResult<EmployeeId>
where
    S: EmployeeStore + ?Sized,
{
    let original = generator.generate(store, candidate);
    resolve_collisions(store, original)
}

/// Returns `original` if it is free, otherwise the first free identifier
/// obtained by adding 1, 2, 3, ... to its serial.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use hrms_engine::identifier::resolve_collisions;
/// use hrms_engine::models::{EmployeeId, EmployeeRecord, Role};
/// use hrms_engine::store::{EmployeeStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// store.insert(EmployeeRecord {
///     employee_id: EmployeeId::new("OIJODO20240003"),
///     name: "John Doe".to_string(),
///     email: "john@example.com".to_string(),
///     role: Role::Employee,
///     employer_name: None,
///     join_date: None,
///     department: None,
///     designation: None,
///     phone: None,
///     password_hash: String::new(),
///     created_at: Utc::now(),
/// })?;
///
/// let id = resolve_collisions(&store, EmployeeId::new("OIJODO20240003"))?;
/// assert_eq!(id.as_str(), "OIJODO20240004");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve_collisions<S>(store: &S, original: EmployeeId) -> HrmsResult<EmployeeId>
where
    S: EmployeeStore + ?Sized,
{
    let base_serial = original.serial();
    let mut current = original.clone();
    let mut collisions: u32 = 0;

    while store.exists_by_employee_id(&current) {
        collisions += 1;

        if collisions >= MAX_ID_COLLISIONS {
            warn!(
                base_id = %original,
                attempts = collisions,
                "Employee ID space exhausted"
            );
            return Err(HrmsError::EmployeeIdExhausted {
                base_id: original.to_string(),
                attempts: collisions,
            });
        }

        current = original.with_serial(base_serial + collisions);
        debug!(
            base_id = %original,
            candidate = %current,
            attempt = collisions,
            "Employee ID collision, bumping serial"
        );
    }

    Ok(current)
}
