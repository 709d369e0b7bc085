//! SKS-weighted IPS computation over joined KRS rows.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::KrsRow;
use crate::error::IpsError;
use crate::ips::grade::Grade;

/// Decimal places kept in displayed quantities.
const DISPLAY_DP: u32 = 2;

/// One KRS row of the IPS breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeLine {
    /// Normalized letter grade.
    pub nilai: Grade,
    /// Credit hours of the course.
    pub sks: i32,
    /// Quality-point weight of the grade.
    #[serde(with = "rust_decimal::serde::float")]
    pub bobot: Decimal,
    /// Weight times credit hours, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub bobot_x_sks: Decimal,
}

/// Computed IPS for one student, with the per-row breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpsReport {
    /// Student identification number.
    pub nim: String,
    /// Student name.
    pub nama: String,
    /// Student major.
    pub jurusan: String,
    /// Total credit hours across all rows.
    pub total_sks: i64,
    /// Total quality points, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_bobot: Decimal,
    /// The weighted average, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub ips: Decimal,
    /// Per-row breakdown, in retrieval order.
    pub detail_perhitungan: Vec<GradeLine>,
}

/// Compute the IPS for `nim` from its joined KRS rows.
///
/// Accumulation is exact decimal arithmetic; only the displayed quantities
/// are rounded. Fails on the first invalid grade token, on an empty row
/// set, and on a zero total-SKS sum.
pub fn compute_ips(nim: &str, rows: &[KrsRow]) -> Result<IpsReport, IpsError> {
    let first = rows.first().ok_or_else(|| IpsError::NotFound {
        nim: nim.to_string(),
    })?;

    let mut total_sks: i64 = 0;
    let mut total_bobot = Decimal::ZERO;
    let mut detail = Vec::with_capacity(rows.len());

    for row in rows {
        let grade = Grade::parse(&row.nilai)?;
        let bobot = grade.weight();
        let quality_points = bobot * Decimal::from(row.sks);

        total_sks += i64::from(row.sks);
        total_bobot += quality_points;

        detail.push(GradeLine {
            nilai: grade,
            sks: row.sks,
            bobot,
            bobot_x_sks: quality_points.round_dp(DISPLAY_DP),
        });
    }

    if total_sks == 0 {
        return Err(IpsError::ZeroCreditHours);
    }

    let ips = (total_bobot / Decimal::from(total_sks)).round_dp(DISPLAY_DP);

    Ok(IpsReport {
        nim: first.nim.clone(),
        nama: first.nama.clone(),
        jurusan: first.jurusan.clone(),
        total_sks,
        total_bobot: total_bobot.round_dp(DISPLAY_DP),
        ips,
        detail_perhitungan: detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn row(nilai: &str, sks: i32) -> KrsRow {
        KrsRow {
            nim: "22002".to_string(),
            nama: "Budi Santoso".to_string(),
            jurusan: "Informatika".to_string(),
            nilai: nilai.to_string(),
            sks,
        }
    }

    #[test]
    fn two_courses_weighted_average() {
        // A x 3 SKS + B+ x 4 SKS = 26.0 quality points over 7 SKS
        let rows = vec![row("A", 3), row("B+", 4)];

        let report = compute_ips("22002", &rows).unwrap();

        assert_eq!(report.nim, "22002");
        assert_eq!(report.nama, "Budi Santoso");
        assert_eq!(report.jurusan, "Informatika");
        assert_eq!(report.total_sks, 7);
        assert_eq!(report.total_bobot, dec!(26.0));
        assert_eq!(report.ips, dec!(3.71));
    }

    #[test]
    fn empty_rows_yield_not_found() {
        let err = compute_ips("99999", &[]).unwrap_err();
        match err {
            IpsError::NotFound { nim } => assert_eq!(nim, "99999"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_grade_aborts_and_names_token() {
        let rows = vec![row("A", 3), row("F", 4)];

        let err = compute_ips("22002", &rows).unwrap_err();
        match err {
            IpsError::InvalidGrade { token, accepted } => {
                assert_eq!(token, "F");
                assert!(accepted.starts_with("A, A-"));
            }
            other => panic!("expected InvalidGrade, got {other:?}"),
        }
    }

    #[test]
    fn zero_total_sks_yields_zero_credit_hours() {
        // Pathological but must not divide by zero
        let rows = vec![row("C", 0)];

        let err = compute_ips("22003", &rows).unwrap_err();
        assert!(matches!(err, IpsError::ZeroCreditHours));
    }

    #[test]
    fn grade_tokens_are_normalized_per_row() {
        let rows = vec![row(" b+ ", 4)];

        let report = compute_ips("22002", &rows).unwrap();

        assert_eq!(report.detail_perhitungan[0].nilai, Grade::BPlus);
        assert_eq!(report.detail_perhitungan[0].bobot, dec!(3.5));
        assert_eq!(report.total_bobot, dec!(14.0));
    }

    #[test]
    fn detail_preserves_retrieval_order() {
        let rows = vec![row("E", 2), row("A", 3), row("C+", 1)];

        let report = compute_ips("22002", &rows).unwrap();

        let grades: Vec<Grade> = report
            .detail_perhitungan
            .iter()
            .map(|line| line.nilai)
            .collect();
        assert_eq!(grades, vec![Grade::E, Grade::A, Grade::CPlus]);
    }

    #[test]
    fn accumulation_is_unrounded_before_the_final_step() {
        // Three B- courses of 1 SKS each: 2.75 * 3 = 8.25, / 3 = 2.75.
        // Rounding per-row first would not change this one, so also mix in
        // a 2-SKS A-: total = 8.25 + 7.5 = 15.75 over 5 SKS = 3.15.
        let rows = vec![row("B-", 1), row("B-", 1), row("B-", 1), row("A-", 2)];

        let report = compute_ips("22002", &rows).unwrap();

        assert_eq!(report.total_sks, 5);
        assert_eq!(report.total_bobot, dec!(15.75));
        assert_eq!(report.ips, dec!(3.15));
    }

    #[test]
    fn per_row_product_is_rounded_to_two_places() {
        // A- x 3 SKS = 11.25 exactly; C+ x 3 = 7.5
        let rows = vec![row("A-", 3), row("C+", 3)];

        let report = compute_ips("22002", &rows).unwrap();

        assert_eq!(report.detail_perhitungan[0].bobot_x_sks, dec!(11.25));
        assert_eq!(report.detail_perhitungan[1].bobot_x_sks, dec!(7.50));
    }

    #[test]
    fn report_serializes_with_wire_field_names() {
        let rows = vec![row("A", 3), row("B+", 4)];
        let report = compute_ips("22002", &rows).unwrap();

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["nim"], "22002");
        assert_eq!(value["total_sks"], 7);
        assert_eq!(value["total_bobot"], serde_json::json!(26.0));
        assert_eq!(value["ips"], serde_json::json!(3.71));
        assert_eq!(value["detail_perhitungan"][1]["nilai"], "B+");
        assert_eq!(value["detail_perhitungan"][1]["bobot_x_sks"], serde_json::json!(14.0));
    }
}
