use ndarray::{Array1, Array2};
use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

/// Plot a scatter of the 2D samples colored by class
pub fn plot_class_scatter(
    x: &Array2<f32>,
    y: &Array1<f32>,
    title: &str,
) -> Result<Plot, String> {
    // Assert that the features and labels have the same length
    assert_eq!(
        x.nrows(),
        y.len(),
        "Features and labels must have the same length"
    );

    // Assert that the labels are only two classes
    assert!(
        y.iter().all(|&l| l == 0.0 || l == 1.0),
        "Labels must be composed of only two classes, 0 for negative and 1 for positive"
    );

    if x.ncols() != 2 {
        return Err(format!(
            "Scatter plot requires 2 feature columns, got {}",
            x.ncols()
        ));
    }

    let mut negative_x = Vec::new();
    let mut negative_y = Vec::new();
    let mut positive_x = Vec::new();
    let mut positive_y = Vec::new();

    for (row, label) in x.rows().into_iter().zip(y.iter()) {
        if *label == 0.0 {
            negative_x.push(row[0]);
            negative_y.push(row[1]);
        } else {
            positive_x.push(row[0]);
            positive_y.push(row[1]);
        }
    }

    let trace_negative = Scatter::new(negative_x, negative_y)
        .mode(Mode::Markers)
        .name("Negative (label 0)");

    let trace_positive = Scatter::new(positive_x, positive_y)
        .mode(Mode::Markers)
        .name("Positive (label 1)");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("x1"))
        .y_axis(Axis::new().title("x2"));

    let mut plot = Plot::new();
    plot.add_trace(trace_negative);
    plot.add_trace(trace_positive);
    plot.set_layout(layout);

    Ok(plot)
}
