//! Summary table export as UTF-8 comma-separated text.

use std::io::Write;

use registry_model::SummaryTable;

/// Writes the summary table: header row of column names, one row per cohort.
pub fn write_summary_csv<W: Write>(table: &SummaryTable, writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(&table.columns)?;
    for row in &table.rows {
        let mut record = Vec::with_capacity(table.columns.len());
        record.push(row.cohort.clone());
        record.extend(row.counts.iter().map(u64::to_string));
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the summary table to an in-memory CSV string.
pub fn summary_csv_string(table: &SummaryTable) -> String {
    let mut buffer = Vec::new();
    write_summary_csv(table, &mut buffer).expect("write to in-memory buffer");
    String::from_utf8(buffer).expect("csv output is utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_cohort_rows() {
        let mut table = SummaryTable::new(vec![
            "Gênero".to_string(),
            "Total".to_string(),
            "Óbitos".to_string(),
        ]);
        table.push_row("F", vec![2, 1]);
        table.push_row("Total", vec![3, 1]);

        let csv = summary_csv_string(&table);
        assert_eq!(csv, "Gênero,Total,Óbitos\nF,2,1\nTotal,3,1\n");
    }
}
