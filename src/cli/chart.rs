//! Text line chart of the average response time per bucket

use crate::quiz::TimeSeriesPoint;

const LABEL_WIDTH: usize = 7;

fn axis_label(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:>6.2}s", v),
        None => " ".repeat(LABEL_WIDTH),
    }
}

/// Render the most recent `width` points into `height` rows plus an axis.
/// Each point is one column; taller means slower.
pub fn render_chart(points: &[TimeSeriesPoint], width: usize, height: usize) -> Vec<String> {
    if points.is_empty() || width == 0 || height == 0 {
        return vec!["(chart fills in every 5 attempts)".to_string()];
    }

    let visible = &points[points.len().saturating_sub(width)..];
    let max = visible
        .iter()
        .map(|p| p.average_secs)
        .fold(0.0_f64, f64::max);

    let mut grid = vec![vec![' '; visible.len() * 2]; height];
    for (col, point) in visible.iter().enumerate() {
        let level = if max > 0.0 {
            ((point.average_secs / max) * (height - 1) as f64).round() as usize
        } else {
            0
        };
        grid[height - 1 - level.min(height - 1)][col * 2] = '*';
    }

    let mut lines = Vec::with_capacity(height + 2);
    for (row_idx, row) in grid.iter().enumerate() {
        let label = if row_idx == 0 {
            axis_label(Some(max))
        } else if row_idx == height - 1 {
            axis_label(Some(0.0))
        } else {
            axis_label(None)
        };
        lines.push(format!("{} |{}", label, row.iter().collect::<String>()));
    }

    lines.push(format!(
        "{} +{}",
        axis_label(None),
        "-".repeat(visible.len() * 2)
    ));
    if let (Some(first), Some(last)) = (visible.first(), visible.last()) {
        lines.push(format!(
            "{}  buckets {}-{}",
            axis_label(None),
            first.bucket,
            last.bucket
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(bucket: u32, average_secs: f64) -> TimeSeriesPoint {
        TimeSeriesPoint {
            bucket,
            average_secs,
        }
    }

    /// Row holding the marker for column `col`
    fn marker_row(lines: &[String], col: usize) -> usize {
        lines
            .iter()
            .position(|line| line.chars().nth(LABEL_WIDTH + 2 + col * 2) == Some('*'))
            .unwrap()
    }

    #[test]
    fn test_slower_buckets_sit_higher() {
        let lines = render_chart(&[point(1, 1.0), point(2, 3.0), point(3, 2.0)], 10, 5);
        assert_eq!(lines.len(), 7);
        assert_eq!(marker_row(&lines, 1), 0);
        assert!(marker_row(&lines, 0) > marker_row(&lines, 2));
        assert!(lines[0].starts_with("  3.00s"));
        assert!(lines[6].contains("buckets 1-3"));
    }

    #[test]
    fn test_keeps_latest_points() {
        let points: Vec<TimeSeriesPoint> = (1..=8).map(|b| point(b, b as f64)).collect();
        let lines = render_chart(&points, 3, 4);
        assert!(lines.last().unwrap().contains("buckets 6-8"));
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(render_chart(&[], 10, 5).len(), 1);
    }

    #[test]
    fn test_all_zero_averages() {
        let lines = render_chart(&[point(1, 0.0), point(2, 0.0)], 10, 3);
        assert_eq!(marker_row(&lines, 0), 2);
        assert_eq!(marker_row(&lines, 1), 2);
    }
}
