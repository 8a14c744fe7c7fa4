//! Plain-text profile output (`spec.md` §6): three comma-separated lines
//! of N values each — velocity, pressure, temperature — for the final
//! time-step profile.

use std::fmt::Write as _;
use std::path::Path;

use tf_solver::Fields;

fn csv_line(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 12);
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{v}");
    }
    out
}

pub fn write_profile(path: &Path, fields: &Fields) -> std::io::Result<()> {
    let mut content = String::new();
    content.push_str(&csv_line(&fields.u));
    content.push('\n');
    content.push_str(&csv_line(&fields.p));
    content.push('\n');
    content.push_str(&csv_line(&fields.t));
    content.push('\n');
    std::fs::write(path, content)
}
