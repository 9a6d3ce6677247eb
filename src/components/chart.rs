//! Price chart window body: a sparkline of the instrument's recent series
//! with the latest value and percentage change in the header line.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Sparkline;

use crate::catalog::Instrument;
use crate::format::format_change;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

/// Percentage change from the first to the last point of the series.
pub fn series_change(data: &[f64]) -> f64 {
    match (data.first(), data.last()) {
        (Some(first), Some(last)) if *first != 0.0 => (last - first) / first * 100.0,
        _ => 0.0,
    }
}

/// Rescales the series into the u64 domain the sparkline widget expects,
/// anchored at the series minimum so small relative moves stay visible.
fn scaled_series(data: &[f64]) -> Vec<u64> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    data.iter()
        .map(|value| {
            if span <= 0.0 {
                1
            } else {
                (((value - min) / span) * 100.0).round() as u64 + 1
            }
        })
        .collect()
}

pub fn render(frame: &mut UiFrame<'_>, area: Rect, instrument: &Instrument) {
    if area.height < 2 || area.width == 0 {
        return;
    }

    let change = series_change(instrument.data);
    let change_color = if change >= 0.0 {
        theme::rise()
    } else {
        theme::fall()
    };
    let latest = instrument.data.last().copied().unwrap_or_default();
    let headline = format!("{} {latest:.1}", instrument.symbol);
    let bounds = area;
    let buffer = frame.buffer_mut();
    safe_set_string(
        buffer,
        bounds,
        area.x,
        area.y,
        &headline,
        Style::default().add_modifier(Modifier::BOLD),
    );
    let change_label = format_change(change);
    let change_x = area.x + headline.chars().count() as u16 + 2;
    safe_set_string(
        buffer,
        bounds,
        change_x,
        area.y,
        &change_label,
        Style::default().fg(change_color),
    );

    let spark_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };
    let series = scaled_series(instrument.data);
    frame.render_widget(
        Sparkline::default()
            .data(&series)
            .style(Style::default().fg(theme::rgb_to_color(instrument.color))),
        spark_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_change_is_relative_to_the_first_point() {
        assert_eq!(series_change(&[100.0, 110.0]), 10.0);
        assert_eq!(series_change(&[100.0, 95.0]), -5.0);
        assert_eq!(series_change(&[]), 0.0);
        assert_eq!(series_change(&[0.0, 5.0]), 0.0);
    }

    #[test]
    fn scaled_series_is_positive_and_ordered() {
        let scaled = scaled_series(&[1.0, 2.0, 3.0]);
        assert_eq!(scaled.len(), 3);
        assert!(scaled[0] < scaled[1] && scaled[1] < scaled[2]);
        assert!(scaled.iter().all(|v| *v >= 1));
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        assert_eq!(scaled_series(&[5.0, 5.0, 5.0]), vec![1, 1, 1]);
    }
}
