use common::ChartDataSet;
use compute::chart::{
    ACTIVITY_COLUMN, EMISSIONS_COLUMN, OFFSET_COLUMN, TRAJECTORY_COLUMN, YEAR_COLUMN,
};
use polars::prelude::DataFrame;

/// Helper function to convert a forecast DataFrame to ChartDataSet
pub fn convert_dataframe_to_chart_data(df: DataFrame) -> Result<ChartDataSet, String> {
    let year_col = df
        .column(YEAR_COLUMN)
        .map_err(|e| format!("Missing {} column: {}", YEAR_COLUMN, e))?;

    let mut chart_data = ChartDataSet::default();

    for i in 0..df.height() {
        let year = year_col
            .get(i)
            .map_err(|e| format!("Error getting year at row {}: {}", i, e))?
            .try_extract::<i32>()
            .map_err(|e| format!("Error extracting year as i32 at row {}: {}", i, e))?;

        chart_data.labels.push(year.to_string());
        chart_data
            .forecasted_activity
            .push(extract_f64(&df, ACTIVITY_COLUMN, i)?);
        chart_data
            .forecasted_emissions
            .push(extract_f64(&df, EMISSIONS_COLUMN, i)?);
        chart_data
            .forecasted_offset
            .push(extract_f64(&df, OFFSET_COLUMN, i)?);
        chart_data
            .target_trajectory
            .push(extract_f64(&df, TRAJECTORY_COLUMN, i)?);
    }

    Ok(chart_data)
}

fn extract_f64(df: &DataFrame, column: &str, row: usize) -> Result<f64, String> {
    df.column(column)
        .map_err(|e| format!("Missing {} column: {}", column, e))?
        .get(row)
        .map_err(|e| format!("Error getting {} at row {}: {}", column, row, e))?
        .try_extract::<f64>()
        .map_err(|e| format!("Error extracting {} as f64 at row {}: {}", column, row, e))
}
