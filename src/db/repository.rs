//! High-level read access to the academic tables.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::metrics;

/// A row from the `mahasiswa` table, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Mahasiswa {
    /// Student identification number.
    pub nim: String,
    /// Student name.
    pub nama: String,
    /// Student major.
    pub jurusan: String,
    /// Enrollment cohort year.
    pub angkatan: i32,
}

/// One KRS enrollment joined with the student and course credit hours.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct KrsRow {
    /// Student identification number.
    pub nim: String,
    /// Student name.
    pub nama: String,
    /// Student major.
    pub jurusan: String,
    /// Raw letter-grade token as stored.
    pub nilai: String,
    /// Credit hours of the course.
    pub sks: i32,
}

const KRS_JOIN: &str = r#"
SELECT
    m.nim,
    m.nama,
    m.jurusan,
    krs.nilai,
    mk.sks
FROM mahasiswa m
JOIN krs ON krs.nim = m.nim
JOIN mata_kuliah mk ON mk.kode_mk = krs.kode_mk
WHERE m.nim = $1
"#;

/// Read-only repository over the academic tables.
///
/// Each call runs inside its own transaction, committed only when the whole
/// read succeeds.
#[derive(Debug, Clone)]
pub struct AcademicRepository {
    pool: PgPool,
}

impl AcademicRepository {
    /// Create a repository over a shared connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every mahasiswa row, in storage order, with no filtering.
    pub async fn list_mahasiswa(&self) -> Result<Vec<Mahasiswa>, sqlx::Error> {
        let _timer = metrics::timer_db_query();
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, Mahasiswa>(
            "SELECT nim, nama, jurusan, angkatan FROM mahasiswa",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rows)
    }

    /// Fetch the joined KRS rows (grade + credit hours) for one NIM.
    pub async fn krs_for_nim(&self, nim: &str) -> Result<Vec<KrsRow>, sqlx::Error> {
        let _timer = metrics::timer_db_query();
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, KrsRow>(KRS_JOIN)
            .bind(nim)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mahasiswa_serializes_with_wire_field_names() {
        let m = Mahasiswa {
            nim: "22002".to_string(),
            nama: "Budi Santoso".to_string(),
            jurusan: "Informatika".to_string(),
            angkatan: 2022,
        };

        let value = serde_json::to_value(&m).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "nim": "22002",
                "nama": "Budi Santoso",
                "jurusan": "Informatika",
                "angkatan": 2022
            })
        );
    }
}
