//! The fixed employee records.

use employees::Employee;

/// `(firstName, lastName)` pairs, in insertion order.
pub const EMPLOYEE_NAMES: [(&str, &str); 3] =
    [("John", "Doe"), ("Jane", "Smith"), ("Peter", "Jones")];

/// Returns the fixture records in insertion order.
pub fn fixtures() -> Vec<Employee> {
    EMPLOYEE_NAMES
        .iter()
        .map(|&(first_name, last_name)| Employee::new(first_name, last_name))
        .collect()
}
