//! Plain-text line charts for (x, y) series, drawn on a character grid so
//! that the console programs can show convergence without a graphical
//! environment.

const PLOT: char = '*';
const HIGHLIGHT: char = 'o';
const REFERENCE: char = '-';
const TICK_WIDTH: usize = 8;

#[derive(Debug, Clone)]
pub struct Chart {
    title: String,
    x_label: String,
    y_label: String,
    width: usize,
    height: usize,
    y_range: Option<(f64, f64)>,
}

impl Chart {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            width: 60,
            height: 15,
            y_range: None,
        }
    }

    /// Grid size in characters, at least 2 x 2.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(2);
        self.height = height.max(2);
        self
    }

    /// Fix the y axis instead of fitting it to the data.
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    /// Render `series` as a chart.  A `highlight` point is drawn over the
    /// series, and a `reference` value is drawn as a horizontal line under
    /// it.
    pub fn render(
        &self,
        series: &[(f64, f64)],
        highlight: Option<(f64, f64)>,
        reference: Option<f64>,
    ) -> String {
        let mut output = format!("{}\n", self.title);
        if series.is_empty() {
            output.push_str("(no data)\n");
            return output;
        }

        let (x_min, x_max) = bounds(series.iter().map(|(x, _)| *x));
        let (y_min, y_max) = match self.y_range {
            Some(range) => range,
            None => bounds(
                series
                    .iter()
                    .map(|(_, y)| *y)
                    .chain(highlight.map(|(_, y)| y))
                    .chain(reference),
            ),
        };
        let (y_min, y_max) = if y_max > y_min {
            (y_min, y_max)
        } else {
            (y_min - 0.5, y_min + 0.5)
        };

        let column = |x: f64| scale(x, x_min, x_max, self.width - 1);
        let row = |y: f64| self.height - 1 - scale(y, y_min, y_max, self.height - 1);

        let mut grid = vec![vec![' '; self.width]; self.height];
        if let Some(reference) = reference {
            if (y_min..=y_max).contains(&reference) {
                grid[row(reference)].iter_mut().for_each(|cell| *cell = REFERENCE);
            }
        }
        for (x, y) in series {
            if y.is_finite() {
                grid[row(*y)][column(*x)] = PLOT;
            }
        }
        if let Some((x, y)) = highlight {
            grid[row(y)][column(x)] = HIGHLIGHT;
        }

        for (index, cells) in grid.iter().enumerate() {
            let tick = if index == 0 {
                format!("{:>width$.4}", y_max, width = TICK_WIDTH)
            } else if index == self.height - 1 {
                format!("{:>width$.4}", y_min, width = TICK_WIDTH)
            } else {
                " ".repeat(TICK_WIDTH)
            };
            output.push_str(&tick);
            output.push_str(" |");
            output.push_str(cells.iter().collect::<String>().trim_end());
            output.push('\n');
        }
        output.push_str(&" ".repeat(TICK_WIDTH));
        output.push_str(" +");
        output.push_str(&"-".repeat(self.width));
        output.push('\n');

        let x_min_label = format_axis_value(x_min);
        let x_max_label = format_axis_value(x_max);
        let gap = (self.width + 2).saturating_sub(x_min_label.len() + x_max_label.len());
        output.push_str(&" ".repeat(TICK_WIDTH));
        output.push_str(&x_min_label);
        output.push_str(&" ".repeat(gap));
        output.push_str(&x_max_label);
        output.push('\n');
        output.push_str(&format!("x: {}, y: {}\n", self.x_label, self.y_label));
        output
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        })
}

/// Position of `value` on an axis of `cells + 1` positions spanning
/// [min, max], clamped to the axis.
fn scale(value: f64, min: f64, max: f64, cells: usize) -> usize {
    if max <= min {
        return 0;
    }
    let fraction = ((value - min) / (max - min)).max(0.0).min(1.0);
    (fraction * cells as f64).round() as usize
}

fn format_axis_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.4}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_rows(rendered: &str) -> Vec<&str> {
        rendered
            .lines()
            .filter(|line| line.contains(" |"))
            .collect()
    }

    #[test]
    fn empty_series_renders_placeholder() {
        let chart = Chart::new("Empty", "x", "y");
        assert_eq!(chart.render(&[], None, None), "Empty\n(no data)\n");
    }

    #[test]
    fn rising_series_goes_bottom_left_to_top_right() {
        let chart = Chart::new("Rising", "n", "p").with_size(3, 3);
        let rendered = chart.render(&[(0.0, 0.0), (1.0, 0.5), (2.0, 1.0)], None, None);
        let rows = plot_rows(&rendered);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].ends_with("|  *"));
        assert!(rows[1].ends_with("| *"));
        assert!(rows[2].ends_with("|*"));
        assert!(rows[0].starts_with("  1.0000"));
        assert!(rows[2].starts_with("  0.0000"));
        assert!(rendered.ends_with("x: n, y: p\n"));
    }

    #[test]
    fn highlight_and_reference_are_drawn() {
        let chart = Chart::new("Marks", "n", "p")
            .with_size(5, 5)
            .with_y_range(0.0, 1.0);
        let rendered = chart.render(&[(0.0, 1.0), (4.0, 1.0)], Some((2.0, 0.5)), Some(0.0));
        let rows = plot_rows(&rendered);
        assert!(rows[0].ends_with("|*   *"));
        assert!(rows[2].ends_with("|  o"));
        assert!(rows[4].ends_with("|-----"));
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let chart = Chart::new("Flat", "n", "p").with_size(4, 3);
        let rendered = chart.render(&[(1.0, 0.25), (1.0, 0.25)], None, None);
        assert_eq!(plot_rows(&rendered).len(), 3);
        assert!(rendered.contains('*'));
    }
}
