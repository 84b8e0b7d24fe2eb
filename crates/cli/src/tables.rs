//! Fixed-width text tables for the menus.
//!
//! Cells longer than their column are cut and end in `...`, so a row never
//! spills past the header width.

use gym_core::workout_class::SCHEDULE_DISPLAY_FORMAT;
use gym_db::models::membership::Membership;
use gym_db::models::user::User;
use gym_db::models::workout_class::WorkoutClass;

use crate::services::RevenueReport;

const ELLIPSIS: &str = "...";

/// A column header and its width in characters.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

const fn col(header: &'static str, width: usize) -> Column {
    Column { header, width }
}

const USER_COLUMNS: [Column; 5] = [
    col("ID", 6),
    col("Username", 20),
    col("Email", 28),
    col("Role", 8),
    col("Phone", 15),
];

const CLASS_COLUMNS: [Column; 8] = [
    col("ID", 6),
    col("Name", 22),
    col("Type", 12),
    col("Schedule", 16),
    col("Minutes", 7),
    col("Enrolled", 9),
    col("Open", 5),
    col("Trainer", 7),
];

const MEMBERSHIP_COLUMNS: [Column; 7] = [
    col("ID", 6),
    col("User", 6),
    col("Type", 12),
    col("Start", 10),
    col("End", 10),
    col("Price", 9),
    col("Status", 8),
];

const REVENUE_COLUMNS: [Column; 4] = [
    col("Type", 16),
    col("Count", 7),
    col("Revenue", 12),
    col("Share", 7),
];

/// Pad or cut `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:<width$}");
    }
    if width <= ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Render a header, a separator line, and one line per row.
pub fn render(columns: &[Column], rows: &[Vec<String>]) -> String {
    let line = |cells: Vec<String>| {
        let joined = columns
            .iter()
            .zip(cells.iter())
            .map(|(c, cell)| fit(cell, c.width))
            .collect::<Vec<_>>()
            .join(" | ");
        joined.trim_end().to_string()
    };

    let mut out = line(columns.iter().map(|c| c.header.to_string()).collect());
    out.push('\n');
    out.push_str(
        &columns
            .iter()
            .map(|c| "-".repeat(c.width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.clone()));
    }
    out
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn users_table(users: &[User]) -> String {
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                u.email.clone(),
                u.role.to_string(),
                u.phone_number.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render(&USER_COLUMNS, &rows)
}

pub fn classes_table(classes: &[WorkoutClass]) -> String {
    let rows: Vec<Vec<String>> = classes
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.class_type.clone(),
                c.schedule.format(SCHEDULE_DISPLAY_FORMAT).to_string(),
                c.duration_minutes.to_string(),
                format!("{}/{}", c.current_enrollment, c.max_capacity),
                c.spare_places().to_string(),
                c.trainer_id.to_string(),
            ]
        })
        .collect();
    render(&CLASS_COLUMNS, &rows)
}

pub fn memberships_table(memberships: &[Membership]) -> String {
    let rows: Vec<Vec<String>> = memberships
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.user_id.to_string(),
                m.membership_type.clone(),
                m.start_date.to_string(),
                m.end_date.to_string(),
                money(m.price),
                m.payment_status.clone(),
            ]
        })
        .collect();
    render(&MEMBERSHIP_COLUMNS, &rows)
}

/// Per-type lines followed by the paid total.
pub fn revenue_table(report: &RevenueReport) -> String {
    let rows: Vec<Vec<String>> = report
        .lines
        .iter()
        .map(|line| {
            vec![
                line.membership_type.clone(),
                line.membership_count.to_string(),
                money(line.revenue),
                format!("{:.1}%", report.share(line)),
            ]
        })
        .collect();
    let mut out = render(&REVENUE_COLUMNS, &rows);
    out.push_str(&format!("\nTotal revenue (paid): {}", money(report.total)));
    out
}
