//! Built-in "Users" dataset used by the demo binary, tests and benches.

use anyhow::Result;

use crate::data::datatable::{DataColumn, DataRow, DataTable, DataValue};

const USERS: [(&str, &str, &str, &str); 16] = [
    ("John Doe", "Admin", "2023-01-15", "Full-time"),
    ("Jane Smith", "Editor", "2023-02-20", "Part-time"),
    ("Mike Johnson", "Viewer", "2023-03-05", "Contract"),
    ("Sarah Williams", "Editor", "2023-04-10", "Full-time"),
    ("Robert Brown", "Admin", "2023-05-22", "Full-time"),
    ("Emily Davis", "Viewer", "2023-06-14", "Part-time"),
    ("Michael Wilson", "Editor", "2023-07-03", "Contract"),
    ("Lisa Miller", "Admin", "2023-08-18", "Full-time"),
    ("David Garcia", "Viewer", "2023-09-05", "Full-time"),
    ("Jennifer Martinez", "Editor", "2023-10-12", "Part-time"),
    ("James Rodriguez", "Admin", "2023-11-20", "Contract"),
    ("Patricia Lewis", "Viewer", "2023-12-08", "Full-time"),
    ("Richard Lee", "Editor", "2024-01-15", "Part-time"),
    ("Linda Walker", "Admin", "2024-02-22", "Full-time"),
    ("Thomas Hall", "Viewer", "2024-03-10", "Contract"),
    ("Elizabeth Young", "Editor", "2024-04-05", "Full-time"),
];

/// Build the 16-record users table: User, Role, Date, Type and a trailing
/// actions column.
pub fn users_table() -> Result<DataTable> {
    let mut table = users_columns(DataTable::new("users"));
    for (user, role, date, kind) in USERS {
        table.add_row(user_row(user, role, date, kind))?;
    }
    Ok(table)
}

/// Build a users-shaped table with `rows` synthetic records.
pub fn generated_users(rows: usize) -> Result<DataTable> {
    let mut table = users_columns(DataTable::new("generated_users"));
    let roles = ["Admin", "Editor", "Viewer"];
    let kinds = ["Full-time", "Part-time", "Contract"];
    for i in 0..rows {
        table.add_row(user_row(
            &format!("User {}", i),
            roles[i % roles.len()],
            &format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            kinds[i % kinds.len()],
        ))?;
    }
    Ok(table)
}

fn users_columns(mut table: DataTable) -> DataTable {
    table
        .add_column(DataColumn::new("User"))
        .add_column(DataColumn::new("Role"))
        .add_column(DataColumn::new("Date"))
        .add_column(DataColumn::new("Type"))
        .add_column(DataColumn::action());
    table
}

fn user_row(user: &str, role: &str, date: &str, kind: &str) -> DataRow {
    DataRow::new(vec![
        DataValue::String(user.to_string()),
        DataValue::String(role.to_string()),
        DataValue::DateTime(date.to_string()),
        DataValue::String(kind.to_string()),
        DataValue::Null,
    ])
}
