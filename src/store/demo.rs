//! Demo records seeded into a store that opens empty.

use crate::models::EmployeeRecord;

use super::generate_id;

fn demo_record(
    name: &str,
    email: &str,
    phone: &str,
    role: &str,
    address: &str,
    salary: &str,
    currency: &str,
) -> EmployeeRecord {
    EmployeeRecord {
        id: generate_id(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role: role.to_string(),
        address: address.to_string(),
        salary: salary.to_string(),
        currency: currency.to_string(),
    }
}

/// Returns the three demo records, each with a freshly generated id.
pub fn demo_records() -> Vec<EmployeeRecord> {
    vec![
        demo_record(
            "Ayesha Khan",
            "ayesha.khan@gmail.com",
            "+92 300 1234567",
            "Manager",
            "Clifton, Karachi",
            "120000.00",
            "PKR",
        ),
        demo_record(
            "Bilal Ahmed",
            "bilal.dev@gmail.com",
            "+92 301 7654321",
            "Developer",
            "Gulshan-e-Iqbal",
            "2000.00",
            "USD",
        ),
        demo_record(
            "Sara Ali",
            "sara.designer@gmail.com",
            "+92 333 9876543",
            "Designer",
            "DHA",
            "1800.00",
            "USD",
        ),
    ]
}
