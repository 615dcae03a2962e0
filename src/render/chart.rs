//! Text charts for the savings trend

const POINT: char = '\u{25CF}';
const CONNECTOR: char = '\u{2502}';
const COLUMN_SPACING: usize = 4;

/// Renders a line chart, one column per value, with the min/max on the y axis
/// and the given labels under the x axis.
pub fn render_chart(values: &[f64], labels: &[String], height: usize) -> String {
    let height = height.max(2);
    if values.is_empty() {
        return String::new();
    }

    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let range = max - min;
    let level = |value: f64| -> usize {
        if range > 0.0 {
            (((value - min) / range) * (height - 1) as f64).round() as usize
        } else {
            0
        }
    };

    let width = (values.len() - 1) * COLUMN_SPACING + 3;
    let column = |index: usize| index * COLUMN_SPACING + 1;
    let mut grid = vec![vec![' '; width]; height];

    let mut previous: Option<usize> = None;
    for (index, &value) in values.iter().enumerate() {
        let current = level(value);
        let x = column(index);
        if let Some(previous) = previous {
            let (low, high) = if previous < current {
                (previous, current)
            } else {
                (current, previous)
            };
            for row in (low + 1)..high {
                grid[row][x - COLUMN_SPACING / 2] = CONNECTOR;
            }
        }
        grid[current][x] = POINT;
        previous = Some(current);
    }

    let max_label = format!("{:.2}", max);
    let min_label = format!("{:.2}", min);
    let label_width = max_label.len().max(min_label.len());

    let mut lines = Vec::with_capacity(height + 2);
    for row in (0..height).rev() {
        let axis_label = if row == height - 1 {
            max_label.as_str()
        } else if row == 0 {
            min_label.as_str()
        } else {
            ""
        };
        let tick = if row == 0 || row == height - 1 { '\u{2524}' } else { '\u{2502}' };
        let body: String = grid[row].iter().collect();
        lines.push(format!(
            "{:>width$} {}{}",
            axis_label,
            tick,
            body.trim_end(),
            width = label_width
        ));
    }

    lines.push(format!("{:>width$} \u{2514}{}", "", "\u{2500}".repeat(width), width = label_width));

    let mut x_axis = vec![' '; width];
    for (index, label) in labels.iter().take(values.len()).enumerate() {
        for (offset, character) in label.chars().enumerate() {
            if let Some(cell) = x_axis.get_mut(column(index) + offset) {
                *cell = character;
            }
        }
    }
    let x_axis: String = x_axis.into_iter().collect();
    lines.push(format!("{:>width$}  {}", "", x_axis.trim_end(), width = label_width));

    lines.join("\n")
}

/// Renders a sparkline, one block character per value.
pub fn render_sparkline(values: &[f64]) -> String {
    let blocks = [
        '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}',
        '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}',
    ];
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let range = max - min;

    values
        .iter()
        .map(|&value| {
            let normalized = if range > 0.0 {
                ((value - min) / range).clamp(0.0, 1.0)
            } else {
                0.0
            };
            blocks[((normalized * 7.0).round() as usize).min(7)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        (0..6).map(|index| index.to_string()).collect()
    }

    #[test]
    fn test_chart_shape() {
        let chart = render_chart(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &labels(), 6);
        let lines: Vec<&str> = chart.lines().collect();

        // rows + x axis + labels
        assert_eq!(lines.len(), 8);
        assert_eq!(chart.matches(POINT).count(), 6);
        assert!(lines[0].starts_with("5.00"));
        assert!(lines[5].starts_with("0.00"));
        assert!(lines[7].trim_start().starts_with("0   1   2   3   4   5"));
    }

    #[test]
    fn test_flat_series_sits_on_bottom_row() {
        let chart = render_chart(&[0.0; 6], &labels(), 4);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[3].matches(POINT).count(), 6);
        assert_eq!(lines[0].matches(POINT).count(), 0);
    }

    #[test]
    fn test_connects_jumps() {
        let chart = render_chart(&[0.0, 10.0], &labels(), 5);
        let lines: Vec<&str> = chart.lines().collect();

        // the three rows between bottom and top carry the axis and a connector
        for line in &lines[1..4] {
            assert_eq!(line.matches(CONNECTOR).count(), 2);
        }
        assert_eq!(lines[0].matches(CONNECTOR).count(), 0);
    }

    #[test]
    fn test_negative_values() {
        let chart = render_chart(&[-2.5, 0.0, 2.5], &labels(), 3);
        assert!(chart.lines().next().unwrap().starts_with(" 2.50"));
        assert!(chart.contains("-2.50"));
    }

    #[test]
    fn test_sparkline() {
        let sparkline = render_sparkline(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(sparkline.chars().count(), 5);
        assert!(sparkline.starts_with('\u{2581}'));
        assert!(sparkline.ends_with('\u{2588}'));
    }

    #[test]
    fn test_sparkline_flat() {
        assert_eq!(render_sparkline(&[0.0; 3]), "\u{2581}\u{2581}\u{2581}");
    }
}
