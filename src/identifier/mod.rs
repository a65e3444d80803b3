//! Employee identifier generation and allocation.
//!
//! An identifier encodes the employer, the employee's name, the join year
//! and a serial: `CCFFLLYYYYSSSS`. Generation is split into the per-segment
//! codes, the generator that assembles them and scans the store for the next
//! serial, and the allocation loop that resolves collisions.

mod allocation;
mod codes;
mod generator;

pub use allocation::{MAX_ID_COLLISIONS, allocate_employee_id, resolve_collisions};
pub use codes::{CODE_WIDTH, NAME_CODE_PAD, employer_code, join_year, name_code, parse_join_date};
pub use generator::{EmployeeIdGenerator, next_serial, serial_pattern};
